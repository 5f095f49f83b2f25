use chrono::Local;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;

use super::{battery, cpu, disk, memory, network, NetworkMeter, Probe};
use crate::config::AppConfig;
use crate::models::Sample;

/// Gathers a [`Sample`] per tick from a [`Probe`].
///
/// Owns the only metric state that outlives a tick: the previous network
/// counters needed for rate mode.
pub struct Collector<P> {
    probe: P,
    mount_point: PathBuf,
    interface: Option<String>,
    meter: NetworkMeter,
}

impl<P: Probe> Collector<P> {
    pub fn new(probe: P, config: &AppConfig) -> Self {
        Self {
            probe,
            mount_point: PathBuf::from(&config.dashboard.mount_point),
            interface: config.network.interface().map(str::to_string),
            meter: NetworkMeter::new(config.network_mode()),
        }
    }

    /// Collects every metric. Never fails; unavailable sources read as zero.
    pub fn sample(&mut self, uptime: Duration) -> Sample {
        let Self {
            probe,
            mount_point,
            interface,
            meter,
        } = self;

        let cpu_percent = cpu::collect_percent(probe);
        let mem_percent = memory::collect_percent(probe);
        let disk_percent = disk::collect_percent(probe, mount_point);
        let counters = network::collect_counters(probe, interface.as_deref());
        let (net_upload_kbs, net_download_kbs) = meter.observe(counters, Instant::now());
        let (battery_percent, battery_status) = battery::collect_level(probe);

        let sample = Sample {
            cpu_percent,
            mem_percent,
            disk_percent,
            net_upload_kbs,
            net_download_kbs,
            battery_percent,
            battery_status,
            uptime,
            wall_clock: Local::now().format("%H:%M:%S").to_string(),
        };

        debug!("{:?}", sample);

        sample
    }
}
