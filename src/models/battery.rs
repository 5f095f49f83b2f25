use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Charging,
    Discharging,
    Full,
    Unknown,
}

impl BatteryStatus {
    /// Derives the charge state from AC presence and remaining capacity (0.0 - 1.0).
    pub fn from_power(on_ac: bool, capacity: f32) -> Self {
        match (on_ac, capacity) {
            (true, c) if c >= 0.99 => BatteryStatus::Full,
            (true, _) => BatteryStatus::Charging,
            (false, _) => BatteryStatus::Discharging,
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BatteryStatus::Charging => "⚡ Charging",
            BatteryStatus::Discharging => "🔋 Discharging",
            BatteryStatus::Full => "✅ Full",
            BatteryStatus::Unknown => "N/A",
        };
        f.write_str(label)
    }
}

/// Raw battery state as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Remaining capacity as a fraction of full capacity.
    pub capacity: f32,
    pub status: BatteryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_power() {
        assert_eq!(BatteryStatus::from_power(true, 1.0), BatteryStatus::Full);
        assert_eq!(BatteryStatus::from_power(true, 0.5), BatteryStatus::Charging);
        assert_eq!(BatteryStatus::from_power(false, 1.0), BatteryStatus::Discharging);
    }

    #[test]
    fn test_unknown_displays_na() {
        assert_eq!(BatteryStatus::Unknown.to_string(), "N/A");
    }
}
