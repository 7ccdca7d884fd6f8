//! Non-homogeneous Poisson arrival generation by thinning.

use crate::queue::rate_table::RateTable;
use crate::queue::service::exponential_variate;
use rand::Rng;
use tracing::trace;

/// Source of successive arrival instants for one shift run.
///
/// Instants beyond the shift length are a sentinel for "no further arrivals
/// this shift"; the engine must never treat them as events.
pub trait ArrivalProcess {
    /// The first inter-arrival gap of a shift, drawn before any rate lookup
    /// is meaningful (time-homogeneous bootstrap).
    fn first_arrival(&mut self) -> f64;

    /// Next arrival instant strictly after `s`.
    fn next_arrival(&mut self, s: f64) -> f64;
}

/// Acceptance/rejection (thinning) sampler against a [`RateTable`].
///
/// Candidates are drawn from a homogeneous exponential stream at `max_rate`
/// and accepted with probability `rate(t) / max_rate`. `max_rate` must
/// upper-bound every table entry; the configuration layer validates this and
/// the sampler additionally clamps the acceptance ratio at 1.
#[derive(Debug)]
pub struct ThinningArrivals<R> {
    table: RateTable,
    max_rate: f64,
    shift_length: f64,
    rng: R,
}

impl<R: Rng> ThinningArrivals<R> {
    /// Create a sampler for one shift of `shift_length` simulation hours.
    pub fn new(table: RateTable, max_rate: f64, shift_length: f64, rng: R) -> Self {
        debug_assert!(
            table.peak_rate() <= max_rate,
            "max_rate {max_rate} does not bound the table peak {}",
            table.peak_rate()
        );
        Self { table, max_rate, shift_length, rng }
    }

    fn candidate_gap(&mut self) -> f64 {
        exponential_variate(self.max_rate, &mut self.rng)
    }
}

impl<R: Rng> ArrivalProcess for ThinningArrivals<R> {
    fn first_arrival(&mut self) -> f64 {
        self.candidate_gap()
    }

    fn next_arrival(&mut self, s: f64) -> f64 {
        let mut t = s;
        loop {
            t += self.candidate_gap();
            if t > self.shift_length {
                // Out-of-range sentinel: the shift sees no further arrivals.
                return t;
            }
            let ratio = self.table.rate_at(t) / self.max_rate;
            debug_assert!(
                ratio <= 1.0,
                "acceptance ratio {ratio} above 1: max_rate does not bound the table"
            );
            let u: f64 = self.rng.gen();
            if u <= ratio.min(1.0) {
                trace!(time = t, ratio, "arrival accepted");
                return t;
            }
        }
    }
}
