//! Compiled-in settings. Nothing is read from disk, flags or the environment.

use log::LevelFilter;
use std::time::Duration;

use crate::collectors::NetworkMode;

/// Delay between two dashboard refreshes.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub mount_point: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            mount_point: "/".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn interval(&self) -> Duration {
        TICK_INTERVAL
    }
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub mode: NetworkMode,
    /// Restrict counters to one interface; `None` sums all of them.
    pub interface: Option<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            mode: NetworkMode::Rate,
            interface: None,
        }
    }
}

impl NetworkConfig {
    pub fn interface(&self) -> Option<&str> {
        self.interface
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct InhibitorConfig {
    pub enabled: bool,
    pub program: String,
    /// Whitespace separated.
    pub args: String,
}

#[cfg(target_os = "macos")]
impl Default for InhibitorConfig {
    fn default() -> Self {
        // Prevent display, idle, disk and system sleep.
        Self {
            enabled: true,
            program: "caffeinate".to_string(),
            args: "-dims".to_string(),
        }
    }
}

#[cfg(not(target_os = "macos"))]
impl Default for InhibitorConfig {
    fn default() -> Self {
        // `cat` holds the lock until our end of its stdin closes.
        Self {
            enabled: true,
            program: "systemd-inhibit".to_string(),
            args: "--what=idle:sleep --who=insomniac --why=dashboard-running --mode=block cat"
                .to_string(),
        }
    }
}

impl InhibitorConfig {
    pub fn args(&self) -> Vec<&str> {
        self.args.split_whitespace().collect()
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // Anything chattier would scroll over the dashboard.
        Self {
            level: LevelFilter::Warn,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub dashboard: DashboardConfig,
    pub network: NetworkConfig,
    pub inhibitor: InhibitorConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        self.logging.level
    }

    pub fn network_mode(&self) -> NetworkMode {
        self.network.mode
    }
}
