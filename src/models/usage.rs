use super::clamp_percent;

/// Used and total byte counts for a memory pool or a volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub used: u64,
    pub total: u64,
}

impl Usage {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        clamp_percent((self.used as f64 / self.total as f64 * 100.0) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let usage = Usage { used: 25, total: 100 };
        assert_eq!(usage.percent(), 25.0);
    }

    #[test]
    fn test_percent_empty_total() {
        assert_eq!(Usage::default().percent(), 0.0);
    }

    #[test]
    fn test_percent_overcommitted() {
        let usage = Usage { used: 300, total: 100 };
        assert_eq!(usage.percent(), 100.0);
    }
}
