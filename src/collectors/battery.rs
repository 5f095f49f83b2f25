use log::debug;
use std::time::Instant;

use super::Probe;
use crate::models::{clamp_percent, BatteryStatus};

/// Returns the charge in percent and the charge state.
///
/// Desktops have no battery, so failures here are expected and only logged
/// at debug level. They yield `(0.0, BatteryStatus::Unknown)`.
pub fn collect_level<P: Probe + ?Sized>(probe: &mut P) -> (f32, BatteryStatus) {
    let start = Instant::now();
    let result = match probe.battery() {
        Ok(reading) => (clamp_percent(reading.capacity * 100.0), reading.status),
        Err(x) => {
            debug!("Battery: unavailable: {}", x);
            (0.0, BatteryStatus::Unknown)
        }
    };
    debug!("battery::collect_level took: {} ms", start.elapsed().as_millis());
    result
}
