//! Per-run statistics and across-run aggregation.

use crate::queue::engine::ShiftOutcome;
use serde::{Deserialize, Serialize};

/// Operating statistics of one completed shift run.
///
/// Averages are `None` for degenerate runs where the underlying quantity is
/// undefined (no clients all day, or fewer than two events for the occupancy
/// estimate) rather than a NaN or a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Number of clients who entered during the shift.
    pub clients_count: usize,
    /// Time worked past nominal closing, never negative.
    pub closing_time_delay: f64,
    /// Mean wait before service over all clients.
    pub average_queue_time: Option<f64>,
    /// Mean time in system over all clients.
    pub average_system_time: Option<f64>,
    /// `1 - (gap between the last two events) / shift length`, a coarse
    /// trailing-idle-time estimator kept for compatibility with the original
    /// procedure; unsound with fewer than two events and not used elsewhere.
    pub average_occupancy_rate: Option<f64>,
    /// Mean system occupancy over all logged events.
    pub average_queue_length: Option<f64>,
}

impl RunResult {
    /// Reduce a finished run to its statistics.
    pub fn from_outcome(outcome: &ShiftOutcome) -> Self {
        let clients = &outcome.clients;
        let events = &outcome.events;

        let average_queue_time = mean(clients.iter().map(|c| c.in_queue_time));
        // Every client has a departure once the run drained; a missing one
        // counts as zero time in system, as the original procedure did.
        let average_system_time =
            mean(clients.iter().map(|c| c.in_system_time().unwrap_or(0.0)));
        let average_queue_length = mean(events.iter().map(|e| f64::from(e.queue_size)));

        let average_occupancy_rate = match events.len() {
            n if n >= 2 && outcome.shift_length > 0.0 => {
                let trailing_gap = events[n - 1].time - events[n - 2].time;
                Some(1.0 - trailing_gap / outcome.shift_length)
            }
            _ => None,
        };

        Self {
            clients_count: clients.len(),
            closing_time_delay: (outcome.final_clock - outcome.shift_length).max(0.0),
            average_queue_time,
            average_system_time,
            average_occupancy_rate,
            average_queue_length,
        }
    }
}

/// Mean of per-run statistics over many independent runs.
///
/// Per-field means skip runs where the field was undefined; `clients_count`
/// is not averaged and is instead reported from a single illustrative run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Number of runs aggregated.
    pub runs: usize,
    /// Mean closing overrun.
    pub closing_time_delay: f64,
    /// Mean of the per-run average queue waits.
    pub average_queue_time: Option<f64>,
    /// Mean of the per-run average times in system.
    pub average_system_time: Option<f64>,
    /// Mean of the per-run occupancy estimates.
    pub average_occupancy_rate: Option<f64>,
    /// Mean of the per-run average queue lengths.
    pub average_queue_length: Option<f64>,
}

impl AggregateResult {
    /// Average a batch of run results field by field.
    pub fn from_runs(results: &[RunResult]) -> Self {
        Self {
            runs: results.len(),
            closing_time_delay: mean(results.iter().map(|r| r.closing_time_delay))
                .unwrap_or(0.0),
            average_queue_time: mean(results.iter().filter_map(|r| r.average_queue_time)),
            average_system_time: mean(results.iter().filter_map(|r| r.average_system_time)),
            average_occupancy_rate: mean(
                results.iter().filter_map(|r| r.average_occupancy_rate),
            ),
            average_queue_length: mean(results.iter().filter_map(|r| r.average_queue_length)),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}
