use std::ops::Add;

/// Byte counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub sent: u64,
    pub received: u64,
}

impl Add for NetCounters {
    type Output = NetCounters;

    fn add(self, other: NetCounters) -> NetCounters {
        NetCounters {
            sent: self.sent.saturating_add(other.sent),
            received: self.received.saturating_add(other.received),
        }
    }
}
