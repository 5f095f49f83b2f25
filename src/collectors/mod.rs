use std::io;
use std::path::Path;
use thiserror::Error;

use crate::models::{BatteryReading, NetCounters, Usage};

pub mod battery;
pub mod collector;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod probe;

pub use collector::Collector;
pub use network::{NetworkMeter, NetworkMode};
pub use probe::SystemProbe;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0} is not available")]
    Unavailable(&'static str),

    #[error("Mount point not found: {0}")]
    MountNotFound(String),

    #[error("Network interface not found: {0}")]
    InterfaceNotFound(String),
}

/// Raw access to the operating system counters.
///
/// Implementations report failures as they are; the collector functions in
/// this module are responsible for turning them into defaults.
pub trait Probe {
    /// Utilisation across all cores since the previous call, in percent.
    fn cpu_percent(&mut self) -> Result<f32, ProbeError>;

    /// Physical memory in use.
    fn memory(&mut self) -> Result<Usage, ProbeError>;

    /// Space in use on the volume mounted at `mount_point`.
    fn disk(&mut self, mount_point: &Path) -> Result<Usage, ProbeError>;

    /// Byte counters since boot. `None` when no interface can be enumerated.
    fn network(&mut self, interface: Option<&str>) -> Result<Option<NetCounters>, ProbeError>;

    /// Charge and state of the first battery.
    fn battery(&mut self) -> Result<BatteryReading, ProbeError>;
}
