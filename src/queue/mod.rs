//! The discrete-event core: rate table, arrival and service generators, the
//! single-server state machine, and the per-run metrics reducer.
//!
//! Everything in this module is deterministic given the random draws; one
//! shift run owns its own client list, event log, and counters, so runs are
//! independent and may execute in parallel.

pub mod arrivals;
pub mod client;
pub mod engine;
pub mod event;
pub mod metrics;
pub mod rate_table;
pub mod service;

pub use arrivals::{ArrivalProcess, ThinningArrivals};
pub use client::Client;
pub use engine::{ShiftOutcome, ShiftSimulation};
pub use event::{Event, EventKind};
pub use metrics::{AggregateResult, RunResult};
pub use rate_table::RateTable;
pub use service::{ExponentialService, ServiceProcess};
