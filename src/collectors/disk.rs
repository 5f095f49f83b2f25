use log::{debug, error};
use std::path::Path;
use std::time::Instant;

use super::Probe;

pub fn collect_percent<P: Probe + ?Sized>(probe: &mut P, mount_point: &Path) -> f32 {
    let start = Instant::now();
    let result = match probe.disk(mount_point) {
        Ok(usage) => usage.percent(),
        Err(x) => {
            error!("Disk usage error for {}: {}", mount_point.display(), x);
            0.0
        }
    };
    debug!("disk::collect_percent took: {} ms", start.elapsed().as_millis());
    result
}
