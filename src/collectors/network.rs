use log::{debug, error, warn};
use std::time::Instant as StdInstant;
use tokio::time::Instant;

use super::Probe;
use crate::models::NetCounters;

const BYTES_PER_KB: f64 = 1024.0;

/// How the upload/download figures are derived from the byte counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkMode {
    /// Bytes moved since the previous tick, per second.
    Rate,
    /// Raw counters since boot.
    Cumulative,
}

/// Returns the byte counters, or zeroes if no interface is enumerable.
pub fn collect_counters<P: Probe + ?Sized>(probe: &mut P, interface: Option<&str>) -> NetCounters {
    let start = StdInstant::now();
    let result = match probe.network(interface) {
        Ok(Some(counters)) => counters,
        Ok(None) => {
            debug!("Network statistics: no interfaces");
            NetCounters::default()
        }
        Err(x) => {
            error!("Network statistics error getting stats: {}", x);
            NetCounters::default()
        }
    };
    debug!("network::collect_counters took: {} ms", start.elapsed().as_millis());
    result
}

/// Turns successive counter snapshots into (upload, download) KB figures.
#[derive(Debug)]
pub struct NetworkMeter {
    mode: NetworkMode,
    last: Option<(NetCounters, Instant)>,
}

impl NetworkMeter {
    pub fn new(mode: NetworkMode) -> Self {
        Self { mode, last: None }
    }

    /// Returns `(upload, download)`: KB/s in rate mode, KB in cumulative mode.
    pub fn observe(&mut self, counters: NetCounters, now: Instant) -> (f64, f64) {
        match self.mode {
            NetworkMode::Cumulative => (
                counters.sent as f64 / BYTES_PER_KB,
                counters.received as f64 / BYTES_PER_KB,
            ),
            NetworkMode::Rate => {
                let previous = self.last.replace((counters, now));
                let Some((before, then)) = previous else {
                    return (0.0, 0.0);
                };

                if counters.sent < before.sent || counters.received < before.received {
                    warn!("Network counters went backwards; resetting rate");
                }

                let secs = now.saturating_duration_since(then).as_secs_f64();
                if secs <= 0.0 {
                    return (0.0, 0.0);
                }

                let sent = counters.sent.saturating_sub(before.sent) as f64;
                let received = counters.received.saturating_sub(before.received) as f64;
                (sent / secs / BYTES_PER_KB, received / secs / BYTES_PER_KB)
            }
        }
    }
}
