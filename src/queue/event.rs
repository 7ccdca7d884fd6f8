//! Event log records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of state transition recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// A client entered the system.
    Arrive,
    /// A client finished service and left.
    Leave,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrive => write!(f, "ARRIVE"),
            EventKind::Leave => write!(f, "LEAVE"),
        }
    }
}

/// One state transition of a shift run.
///
/// Events are appended in occurrence order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Sequence number of the client the transition belongs to.
    pub client_id: u32,
    /// Arrival or departure.
    pub kind: EventKind,
    /// Simulation-clock time of the transition, hours from shift start.
    pub time: f64,
    /// System occupancy immediately after the transition.
    pub queue_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Arrive.to_string(), "ARRIVE");
        assert_eq!(EventKind::Leave.to_string(), "LEAVE");
    }

    #[test]
    fn test_event_serialization_uses_uppercase_kind() {
        let event = Event { client_id: 1, kind: EventKind::Arrive, time: 0.5, queue_size: 1 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"ARRIVE\""));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
