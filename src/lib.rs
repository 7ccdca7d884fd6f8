//! Service Counter Simulator
//!
//! A Monte Carlo estimator for the operating statistics of a single-server
//! service counter whose customer arrival rate varies by hour of day. One
//! working shift is simulated as a discrete-event process many times over;
//! per-shift metrics are averaged across the independent runs.
//!
//! # Overview
//!
//! Arrivals follow a non-homogeneous Poisson process sampled by thinning
//! (acceptance/rejection) against an hourly rate table. Service times are
//! exponential. The engine interleaves arrivals and departures as a
//! single-server FIFO state machine, keeps a chronological event log and a
//! per-client record, and keeps serving past closing time until the queue
//! drains. A reducer turns each finished run into queue-wait, time-in-system,
//! occupancy, queue-length, and closing-overrun estimates.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_counter_sim::{SimulationConfig, SimulationOrchestrator};
//!
//! let config = SimulationConfig { runs: 10, seed: Some(7), ..Default::default() };
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let summary = orchestrator.run_all()?;
//! println!("average overrun: {:.5} h", summary.aggregate.closing_time_delay);
//! # Ok::<(), service_counter_sim::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: configuration, CLI arguments, and shared enums
//! - [`queue`]: the discrete-event core (rate table, generators, engine, metrics)
//! - [`simulation`]: orchestration, error types, and logging setup
//! - [`report`]: text/JSON rendering of results (reads fields only)
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod queue;
pub mod report;
pub mod simulation;
pub mod types;

// Core queue model
pub use queue::{
    AggregateResult, ArrivalProcess, Client, Event, EventKind, ExponentialService, RateTable,
    RunResult, ServiceProcess, ShiftOutcome, ShiftSimulation, ThinningArrivals,
};

// Configuration
pub use types::{CliArgs, ConfigValidationError, OutputFormat, SimulationConfig};

// Orchestration and error handling
pub use simulation::{
    LoggingConfig, ShiftReport, SimulationError, SimulationOrchestrator, SimulationResult,
    SimulationSummary,
};
