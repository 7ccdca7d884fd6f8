//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.

use crate::types::config::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur while configuring or running the simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// A structural guarantee of the state machine was broken, e.g. a
    /// departure with an empty queue; the run is aborted, never patched up
    #[error("Simulation invariant violated: {0}")]
    InvariantViolation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an invariant-violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
