//! Hourly arrival-rate lookup.

/// Fixed mapping from hour-of-shift to an hourly arrival rate.
///
/// Rates are indexed by integer hour offset from shift start; times before
/// the shift or beyond the last defined hour yield rate 0, which forces the
/// thinning sampler to reject candidates outside the table's coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: Vec<f64>,
}

impl RateTable {
    /// Build a table from per-hour rates, entry 0 covering the first shift hour.
    pub fn new(rates: Vec<f64>) -> Self {
        Self { rates }
    }

    /// Arrival rate in effect at simulation time `t` (hours from shift start).
    pub fn rate_at(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        self.rates.get(t.floor() as usize).copied().unwrap_or(0.0)
    }

    /// Largest rate in the table, 0 for an empty table.
    pub fn peak_rate(&self) -> f64 {
        self.rates.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_floors_to_hour_bucket() {
        let table = RateTable::new(vec![0.2, 0.4, 0.6]);
        assert_eq!(table.rate_at(0.0), 0.2);
        assert_eq!(table.rate_at(0.99), 0.2);
        assert_eq!(table.rate_at(1.0), 0.4);
        assert_eq!(table.rate_at(2.5), 0.6);
    }

    #[test]
    fn test_uncovered_hours_have_zero_rate() {
        let table = RateTable::new(vec![0.2, 0.4]);
        assert_eq!(table.rate_at(-0.5), 0.0);
        assert_eq!(table.rate_at(2.0), 0.0);
        assert_eq!(table.rate_at(100.0), 0.0);
    }

    #[test]
    fn test_peak_rate() {
        let table = RateTable::new(vec![0.2, 0.9, 0.4]);
        assert_eq!(table.peak_rate(), 0.9);
        assert_eq!(RateTable::new(Vec::new()).peak_rate(), 0.0);
    }
}
