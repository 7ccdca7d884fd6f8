//! Shared types: configuration, CLI arguments, and enums.

pub mod config;
pub mod enums;

pub use config::{CliArgs, ConfigValidationError, SimulationConfig};
pub use enums::OutputFormat;
