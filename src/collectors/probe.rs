use log::debug;
use std::io;
use std::path::Path;
use sysinfo::{Disks, System as SysInfo};
use systemstat::{NetworkStats, Platform, System as SystemStat};

use super::{Probe, ProbeError};
use crate::models::{BatteryReading, BatteryStatus, NetCounters, Usage};

/// [`Probe`] backed by `sysinfo` (cpu, disks) and `systemstat` (memory,
/// network counters, battery).
pub struct SystemProbe {
    sys_info: SysInfo,
    sys_stat: SystemStat,
}

impl SystemProbe {
    pub fn new() -> Self {
        let mut sys_info = SysInfo::new();
        // Prime the counters so the next refresh yields a real delta.
        sys_info.refresh_cpu_usage();

        Self {
            sys_info,
            sys_stat: SystemStat::new(),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn to_counters(stats: &NetworkStats) -> NetCounters {
    NetCounters {
        sent: stats.tx_bytes.as_u64(),
        received: stats.rx_bytes.as_u64(),
    }
}

/// A battery is present, so an unreadable AC state still means it is
/// discharging as far as anyone can tell.
fn battery_status(on_ac: io::Result<bool>, capacity: f32) -> BatteryStatus {
    match on_ac {
        Ok(on_ac) => BatteryStatus::from_power(on_ac, capacity),
        Err(x) => {
            debug!("AC power state unavailable: {}", x);
            BatteryStatus::Discharging
        }
    }
}

impl Probe for SystemProbe {
    fn cpu_percent(&mut self) -> Result<f32, ProbeError> {
        self.sys_info.refresh_cpu_usage();
        if self.sys_info.cpus().is_empty() {
            return Err(ProbeError::Unavailable("CPU usage"));
        }
        Ok(self.sys_info.global_cpu_usage())
    }

    fn memory(&mut self) -> Result<Usage, ProbeError> {
        let mem = self.sys_stat.memory()?;
        let total = mem.total.as_u64();
        Ok(Usage {
            used: total.saturating_sub(mem.free.as_u64()),
            total,
        })
    }

    fn disk(&mut self, mount_point: &Path) -> Result<Usage, ProbeError> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .map(|disk| Usage {
                used: disk.total_space().saturating_sub(disk.available_space()),
                total: disk.total_space(),
            })
            .ok_or_else(|| ProbeError::MountNotFound(mount_point.display().to_string()))
    }

    fn network(&mut self, interface: Option<&str>) -> Result<Option<NetCounters>, ProbeError> {
        let networks = self.sys_stat.networks()?;
        if networks.is_empty() {
            return Ok(None);
        }

        match interface {
            Some(name) => {
                if !networks.contains_key(name) {
                    return Err(ProbeError::InterfaceNotFound(name.to_string()));
                }
                let stats = self.sys_stat.network_stats(name)?;
                Ok(Some(to_counters(&stats)))
            }
            None => {
                let mut total = NetCounters::default();
                for name in networks.keys() {
                    match self.sys_stat.network_stats(name) {
                        Ok(stats) => total = total + to_counters(&stats),
                        Err(x) => debug!("Network statistics unavailable for {}: {}", name, x),
                    }
                }
                Ok(Some(total))
            }
        }
    }

    fn battery(&mut self) -> Result<BatteryReading, ProbeError> {
        let life = self.sys_stat.battery_life()?;
        let capacity = life.remaining_capacity;
        let status = battery_status(self.sys_stat.on_ac_power(), capacity);
        Ok(BatteryReading { capacity, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_status_follows_ac_power() {
        assert_eq!(battery_status(Ok(true), 1.0), BatteryStatus::Full);
        assert_eq!(battery_status(Ok(true), 0.4), BatteryStatus::Charging);
        assert_eq!(battery_status(Ok(false), 0.4), BatteryStatus::Discharging);
    }

    #[test]
    fn test_unreadable_ac_state_is_not_na() {
        let status = battery_status(Err(io::Error::new(io::ErrorKind::Other, "no AC")), 0.6);
        assert_eq!(status, BatteryStatus::Discharging);
        assert_ne!(status.to_string(), "N/A");
    }
}
