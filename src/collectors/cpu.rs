use log::{debug, error};
use std::time::Instant;

use super::Probe;
use crate::models::clamp_percent;

pub fn collect_percent<P: Probe + ?Sized>(probe: &mut P) -> f32 {
    let start = Instant::now();
    let result = match probe.cpu_percent() {
        Ok(percent) => clamp_percent(percent),
        Err(x) => {
            error!("CPU load: error: {}", x);
            0.0
        }
    };
    debug!("cpu::collect_percent took: {} ms", start.elapsed().as_millis());
    result
}
