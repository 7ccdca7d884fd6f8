//! Repeats independent shift runs and averages their statistics.

use crate::queue::{
    AggregateResult, Client, Event, ExponentialService, RateTable, RunResult, ShiftSimulation,
    ThinningArrivals,
};
use crate::simulation::error::SimulationResult;
use crate::types::SimulationConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// A run result together with the full logs it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftReport {
    /// The reduced statistics of the run.
    pub result: RunResult,
    /// Chronological event log of the run.
    pub events: Vec<Event>,
    /// All clients of the run, in arrival order.
    pub clients: Vec<Client>,
}

/// Outcome of a complete Monte Carlo session.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    /// Field-wise mean over all runs.
    pub aggregate: AggregateResult,
    /// Detailed logs of the first run, when requested.
    pub first_run: Option<ShiftReport>,
}

/// Drives the repeated, mutually independent shift runs.
///
/// Each run gets its own run-scoped generators seeded from a master RNG, so
/// no state leaks between runs and a fixed master seed reproduces the whole
/// session bit for bit.
#[derive(Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
    rng: StdRng,
}

impl SimulationOrchestrator {
    /// Validate the configuration and set up the master RNG.
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng: StdRng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            SeedableRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            SeedableRng::from_entropy()
        };

        Ok(Self { config, rng })
    }

    /// Simulate one shift and reduce it to its statistics.
    pub fn run_one_shift(&mut self) -> SimulationResult<RunResult> {
        Ok(self.run_one_shift_detailed()?.result)
    }

    /// Simulate one shift and keep the full event log and client list.
    pub fn run_one_shift_detailed(&mut self) -> SimulationResult<ShiftReport> {
        let shift_length = self.config.shift_length();

        let arrivals = ThinningArrivals::new(
            RateTable::new(self.config.rate_table.clone()),
            self.config.max_arrival_rate,
            shift_length,
            StdRng::seed_from_u64(self.rng.gen()),
        );
        let service = ExponentialService::new(
            self.config.service_rate,
            StdRng::seed_from_u64(self.rng.gen()),
        );

        let outcome = ShiftSimulation::new(arrivals, service, shift_length).run()?;
        let result = RunResult::from_outcome(&outcome);
        debug!(
            clients = result.clients_count,
            overrun = result.closing_time_delay,
            "shift run completed"
        );

        Ok(ShiftReport { result, events: outcome.events, clients: outcome.clients })
    }

    /// Run the configured number of shifts and average their statistics.
    pub fn run_all(&mut self) -> SimulationResult<SimulationSummary> {
        let runs = self.config.runs;
        info!("Simulating {} independent shift runs", runs);

        let mut results = Vec::with_capacity(runs);
        let mut first_run = None;

        for index in 0..runs {
            if index == 0 && self.config.show_first_run {
                let report = self.run_one_shift_detailed()?;
                results.push(report.result.clone());
                first_run = Some(report);
            } else {
                results.push(self.run_one_shift()?);
            }
        }

        let aggregate = AggregateResult::from_runs(&results);
        info!(
            runs = aggregate.runs,
            closing_time_delay = aggregate.closing_time_delay,
            "simulation session finished"
        );

        Ok(SimulationSummary { aggregate, first_run })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SimulationConfig {
        SimulationConfig { runs: 5, seed: Some(1234), ..Default::default() }
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let config = SimulationConfig { runs: 0, ..Default::default() };
        assert!(SimulationOrchestrator::new(config).is_err());
    }

    #[test]
    fn test_fixed_seed_reproduces_event_logs() {
        let mut a = SimulationOrchestrator::new(seeded_config()).unwrap();
        let mut b = SimulationOrchestrator::new(seeded_config()).unwrap();

        for _ in 0..3 {
            let report_a = a.run_one_shift_detailed().unwrap();
            let report_b = b.run_one_shift_detailed().unwrap();
            assert_eq!(report_a, report_b);
        }
    }

    #[test]
    fn test_runs_are_not_identical_to_each_other() {
        let mut orchestrator = SimulationOrchestrator::new(seeded_config()).unwrap();
        let first = orchestrator.run_one_shift_detailed().unwrap();
        let second = orchestrator.run_one_shift_detailed().unwrap();
        assert_ne!(first.events, second.events);
    }

    #[test]
    fn test_run_all_aggregates_every_run() {
        let config = SimulationConfig { show_first_run: true, ..seeded_config() };
        let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
        let summary = orchestrator.run_all().unwrap();

        assert_eq!(summary.aggregate.runs, 5);
        assert!(summary.first_run.is_some());
        assert!(summary.aggregate.closing_time_delay >= 0.0);
    }

    #[test]
    fn test_first_run_logs_omitted_by_default() {
        let mut orchestrator = SimulationOrchestrator::new(seeded_config()).unwrap();
        let summary = orchestrator.run_all().unwrap();
        assert!(summary.first_run.is_none());
    }
}
