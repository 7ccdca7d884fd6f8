//! Service-time generation.

use rand::Rng;

/// Draw an exponential variate with the given rate via the inverse CDF.
///
/// `1 - u` keeps the argument of `ln` in `(0, 1]`, so a uniform draw of
/// exactly 0 yields a zero variate rather than infinity.
pub(crate) fn exponential_variate<R: Rng + ?Sized>(rate: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    -(1.0 - u).ln() / rate
}

/// Source of service durations, one draw per service start.
pub trait ServiceProcess {
    /// Duration of the next service, in simulation hours.
    fn service_duration(&mut self) -> f64;
}

/// Exponentially distributed service times with a fixed rate.
#[derive(Debug)]
pub struct ExponentialService<R> {
    rate: f64,
    rng: R,
}

impl<R: Rng> ExponentialService<R> {
    /// Create a generator for the given service rate (clients per hour).
    pub fn new(rate: f64, rng: R) -> Self {
        Self { rate, rng }
    }
}

impl<R: Rng> ServiceProcess for ExponentialService<R> {
    fn service_duration(&mut self) -> f64 {
        exponential_variate(self.rate, &mut self.rng)
    }
}
