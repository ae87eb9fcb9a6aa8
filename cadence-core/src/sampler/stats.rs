//! Sampler statistics
//!
//! Counters only. Nothing here feeds back into scheduling.

/// Running totals since the sampler started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerStats {
    /// Records produced (one per due deadline)
    pub records: u32,
    /// Records taken a full period or more after their deadline
    pub catch_up_records: u32,
    /// Worst lateness seen (µs)
    pub max_lateness_us: u32,
    /// Records the UART refused
    pub write_errors: u32,
}

impl SamplerStats {
    /// Account for one sampling instant
    pub fn record(&mut self, lateness_us: u32, period_us: u32, delivered: bool) {
        self.records = self.records.wrapping_add(1);

        if lateness_us >= period_us {
            self.catch_up_records = self.catch_up_records.wrapping_add(1);
        }

        self.max_lateness_us = self.max_lateness_us.max(lateness_us);

        if !delivered {
            self.write_errors = self.write_errors.wrapping_add(1);
        }
    }

    /// Records that reached the UART
    pub fn delivered(&self) -> u32 {
        self.records.wrapping_sub(self.write_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_time_records() {
        let mut stats = SamplerStats::default();
        stats.record(0, 1000, true);
        stats.record(12, 1000, true);

        assert_eq!(stats.records, 2);
        assert_eq!(stats.catch_up_records, 0);
        assert_eq!(stats.max_lateness_us, 12);
        assert_eq!(stats.delivered(), 2);
    }

    #[test]
    fn test_catch_up_and_failures() {
        let mut stats = SamplerStats::default();
        stats.record(5000, 1000, true);
        stats.record(4000, 1000, false);
        stats.record(999, 1000, true);

        assert_eq!(stats.catch_up_records, 2);
        assert_eq!(stats.max_lateness_us, 5000);
        assert_eq!(stats.write_errors, 1);
        assert_eq!(stats.delivered(), 2);
    }
}
