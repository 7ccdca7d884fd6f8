//! Orchestration of repeated shift runs, error types, and logging setup.

pub mod error;
pub mod logging;
pub mod orchestrator;

pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use orchestrator::{ShiftReport, SimulationOrchestrator, SimulationSummary};
