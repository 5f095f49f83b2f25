//! Text formatting for the dashboard lines.
//!
//! Everything here is pure; painting to the terminal lives in `dashboard`.

use std::time::Duration;

use crate::models::{clamp_percent, BatteryStatus};

pub mod gauge;

pub use gauge::{format_usage, usage_bar, BAR_LENGTH};

pub fn format_upload(kbs: f64) -> String {
    format!("🌐 Upload:   {:>19.2} KB/s", kbs)
}

pub fn format_download(kbs: f64) -> String {
    format!("🌐 Download: {:>19.2} KB/s", kbs)
}

pub fn format_battery(percent: f32, status: BatteryStatus) -> String {
    format!("🔋 Battery:  {:>15.2}%  {}", clamp_percent(percent), status)
}

/// Elapsed time as `3s`, `1m5s`, `2h0m7s`. Hours are not folded into days.
pub fn format_uptime(uptime: Duration) -> String {
    let duration = uptime.as_secs();
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Rounds to the nearest whole second, halves away from zero.
pub fn round_to_seconds(elapsed: Duration) -> Duration {
    Duration::from_secs((elapsed.as_millis() as u64 + 500) / 1000)
}
