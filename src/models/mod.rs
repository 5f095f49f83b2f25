use std::time::Duration;

pub(crate) mod battery;
pub(crate) mod network;
pub(crate) mod usage;

pub use battery::{BatteryReading, BatteryStatus};
pub use network::NetCounters;
pub use usage::Usage;

/// One tick's worth of metrics, consumed by the renderer and then dropped.
#[derive(Debug, Clone)]
pub struct Sample {
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub disk_percent: f32,
    pub net_upload_kbs: f64,
    pub net_download_kbs: f64,
    pub battery_percent: f32,
    pub battery_status: BatteryStatus,
    pub uptime: Duration,
    pub wall_clock: String,
}

/// Forces a reading into `[0, 100]`; NaN and infinities become 0.
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
