//! End-to-end scenarios from the queueing model's edge cases.

use std::collections::VecDeque;

use service_counter_sim::{
    ArrivalProcess, ServiceProcess, ShiftSimulation, SimulationConfig, SimulationOrchestrator,
};

/// Replays a fixed list of instants or durations; empty means "no more".
struct Scripted {
    values: VecDeque<f64>,
}

impl Scripted {
    fn new(values: &[f64]) -> Self {
        Self { values: values.iter().copied().collect() }
    }

    fn pop(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(f64::INFINITY)
    }
}

impl ArrivalProcess for Scripted {
    fn first_arrival(&mut self) -> f64 {
        self.pop()
    }

    fn next_arrival(&mut self, _s: f64) -> f64 {
        self.pop()
    }
}

impl ServiceProcess for Scripted {
    fn service_duration(&mut self) -> f64 {
        self.pop()
    }
}

#[test]
fn zero_length_shift_terminates_immediately() {
    let config = SimulationConfig {
        shift_start_hour: 9,
        shift_end_hour: 9,
        runs: 1,
        seed: Some(5),
        ..Default::default()
    };
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    let result = orchestrator.run_one_shift().unwrap();

    assert_eq!(result.clients_count, 0);
    assert_eq!(result.closing_time_delay, 0.0);
    assert_eq!(result.average_queue_time, None);
    assert_eq!(result.average_occupancy_rate, None);
}

#[test]
fn fast_server_keeps_the_queue_empty() {
    // Arrivals at 5/hour against a server doing 200/hour: waits and queue
    // lengths should stay near zero on average. Statistical bound, not
    // bit-exact.
    let config = SimulationConfig {
        shift_start_hour: 9,
        shift_end_hour: 10,
        rate_table: vec![5.0],
        max_arrival_rate: 5.0,
        service_rate: 200.0,
        runs: 200,
        seed: Some(31),
        ..Default::default()
    };
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    let summary = orchestrator.run_all().unwrap();

    let queue_time = summary.aggregate.average_queue_time.unwrap();
    let queue_length = summary.aggregate.average_queue_length.unwrap();
    assert!(queue_time < 0.05, "average queue time {queue_time} not near zero");
    assert!(queue_length < 1.5, "average queue length {queue_length} not near 0-1");
}

#[test]
fn second_arrival_before_first_service_accrues_wait() {
    // Two clients arrive while the first is still being served; only the
    // second one waits, and its wait starts counting when service begins.
    let arrivals = Scripted::new(&[1.0, 2.0]);
    let service = Scripted::new(&[5.0, 1.0]);
    let outcome = ShiftSimulation::new(arrivals, service, 10.0).run().unwrap();

    assert_eq!(outcome.clients.len(), 2);
    assert_eq!(outcome.clients[0].in_queue_time, 0.0);
    assert!(outcome.clients[1].in_queue_time > 0.0);
    assert_eq!(outcome.clients[1].in_queue_time, 4.0);
}

#[test]
fn late_arrivals_are_served_after_closing() {
    // The last client arrives just before closing; the run overruns by the
    // remaining service time and the delay shows up in the metrics.
    let arrivals = Scripted::new(&[0.5, 3.9]);
    let service = Scripted::new(&[1.0, 3.0]);
    let outcome = ShiftSimulation::new(arrivals, service, 4.0).run().unwrap();
    let result = service_counter_sim::RunResult::from_outcome(&outcome);

    assert_eq!(result.clients_count, 2);
    assert!((result.closing_time_delay - 2.9).abs() < 1e-12);
    assert!(outcome.clients.iter().all(|c| c.leave_time.is_some()));
}
