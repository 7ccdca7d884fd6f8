//! Per-client bookkeeping.

use serde::{Deserialize, Serialize};

/// One customer who entered the system during a shift run.
///
/// Created at arrival; `in_queue_time` is set once when the client begins
/// service, `leave_time` once at departure. Ids are strictly increasing from
/// 1 within a run and reset with each new run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Sequence number in arrival order, starting at 1.
    pub id: u32,
    /// Simulation-clock arrival time, hours from shift start.
    pub arrival_time: f64,
    /// Departure time; `None` while the client is still in the system.
    pub leave_time: Option<f64>,
    /// Wait before service began; 0 until service starts.
    pub in_queue_time: f64,
}

impl Client {
    /// Record a client arriving at `arrival_time`.
    pub fn new(id: u32, arrival_time: f64) -> Self {
        Self { id, arrival_time, leave_time: None, in_queue_time: 0.0 }
    }

    /// Total time spent in the system; `None` while still inside.
    pub fn in_system_time(&self) -> Option<f64> {
        self.leave_time.map(|leave| leave - self.arrival_time)
    }

    /// Time spent being served, i.e. time in system minus queue wait.
    pub fn service_time(&self) -> Option<f64> {
        self.in_system_time().map(|total| total - self.in_queue_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_has_no_departure() {
        let client = Client::new(1, 0.25);
        assert_eq!(client.id, 1);
        assert_eq!(client.leave_time, None);
        assert_eq!(client.in_queue_time, 0.0);
        assert_eq!(client.in_system_time(), None);
        assert_eq!(client.service_time(), None);
    }

    #[test]
    fn test_derived_times() {
        let mut client = Client::new(3, 1.0);
        client.in_queue_time = 0.5;
        client.leave_time = Some(2.25);

        assert_eq!(client.in_system_time(), Some(1.25));
        assert_eq!(client.service_time(), Some(0.75));
    }
}
