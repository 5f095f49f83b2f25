use log::{debug, error};
use std::time::Instant;

use super::Probe;

pub fn collect_percent<P: Probe + ?Sized>(probe: &mut P) -> f32 {
    let start = Instant::now();
    let result = match probe.memory() {
        Ok(usage) => usage.percent(),
        Err(x) => {
            error!("Memory statistics error getting stats: {}", x);
            0.0
        }
    };
    debug!("memory::collect_percent took: {} ms", start.elapsed().as_millis());
    result
}
