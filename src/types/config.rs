//! Configuration structures for the service counter simulator
//!
//! This module contains the simulation configuration structure and validation
//! logic used to control the shift window, the hourly arrival-rate table, the
//! server, and the Monte Carlo repetition count.

use crate::simulation::error::{SimulationError, SimulationResult};
use crate::types::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Hourly arrival rates of the original measurement campaign, one entry per
/// shift hour starting at 09:00. Counted per hour, pre-scaled to the
/// simulation time unit (1 unit = 1 hour, rates divided by 60).
pub const DEFAULT_RATE_TABLE: [f64; 14] = [
    20.2 / 60.0,
    28.1 / 60.0,
    24.6 / 60.0,
    44.0 / 60.0,
    40.8 / 60.0,
    36.1 / 60.0,
    28.5 / 60.0,
    28.4 / 60.0,
    52.9 / 60.0,
    50.1 / 60.0,
    48.6 / 60.0,
    32.4 / 60.0,
    36.3 / 60.0,
    20.2 / 60.0,
];

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "service-counter-sim",
    version,
    about = "Service Counter Simulator - Monte Carlo estimates for a single-server queue",
    long_about = "Simulates one working shift of a single-server service counter with an \
hourly-varying Poisson arrival process, repeats the shift many times, and reports averaged \
operating statistics (queue wait, time in system, occupancy, queue length, closing overrun).

EXAMPLES:
    # Run with default settings (the original 09:00-23:00 shift, 90 runs)
    service-counter-sim

    # Use a configuration file
    service-counter-sim --config shift.json

    # Override specific settings
    service-counter-sim --runs 500 --seed 42

    # Show the event and client tables of the first run
    service-counter-sim --show-first-run

    # Generate a configuration template
    service-counter-sim --print-config > shift.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON format)
    3. Default values (lowest priority)

    The rate table can only be changed through a configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments override file settings."
    )]
    pub config: Option<String>,

    /// Number of independent shift runs to average over
    #[arg(
        long,
        help = "Number of independent shift runs",
        long_help = "How many times the shift is simulated. Results are averaged over all runs. Must be at least 1. Default: 90"
    )]
    pub runs: Option<usize>,

    /// Hour of day at which the shift opens
    #[arg(long, help = "Shift opening hour (0-23)")]
    pub shift_start_hour: Option<u32>,

    /// Hour of day at which the shift nominally closes
    #[arg(long, help = "Shift closing hour, clients present at closing are still served")]
    pub shift_end_hour: Option<u32>,

    /// Service rate of the single server (clients per hour unit)
    #[arg(long, help = "Exponential service rate of the server")]
    pub service_rate: Option<f64>,

    /// Upper bound on the arrival rate, used by the thinning sampler
    #[arg(
        long,
        help = "Upper-bound arrival rate for thinning",
        long_help = "Rate of the homogeneous Poisson process the thinning sampler rejects from. Must be at least as large as every rate-table entry."
    )]
    pub max_arrival_rate: Option<f64>,

    /// Output format for the aggregate summary
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the aggregate summary. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Print the full event log and client table of the first run
    #[arg(long, help = "Print the event log and client table of the first run")]
    pub show_first_run: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the simulation
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// Shift closes before it opens
    #[error("Invalid shift window: end hour {end} must not be before start hour {start}")]
    InvertedShiftWindow {
        /// Configured opening hour
        start: u32,
        /// Configured closing hour
        end: u32,
    },

    /// Shift hours must be hours of day
    #[error("Invalid shift hour {0}: must be between 0 and 24")]
    ShiftHourOutOfRange(u32),

    /// The server must make progress
    #[error("Service rate must be positive, got {0}")]
    NonPositiveServiceRate(f64),

    /// Rate table entries are arrival intensities
    #[error("Arrival rate for shift hour {hour} is negative: {rate}")]
    NegativeArrivalRate {
        /// Hour offset from shift start
        hour: usize,
        /// The offending rate value
        rate: f64,
    },

    /// The thinning sampler rejects from a homogeneous process at this rate
    #[error("Thinning upper-bound rate must be positive, got {0}")]
    NonPositiveBoundRate(f64),

    /// Acceptance probabilities above 1 would silently mis-sample
    #[error(
        "Upper-bound rate {bound} is below the rate-table entry {rate} for shift hour {hour}"
    )]
    UnderestimatedPeakRate {
        /// Hour offset from shift start
        hour: usize,
        /// The table entry exceeding the bound
        rate: f64,
        /// The configured upper bound
        bound: f64,
    },

    /// At least one run is needed to estimate anything
    #[error("Run count must be at least 1")]
    ZeroRuns,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Hour of day at which the shift opens
    pub shift_start_hour: u32,
    /// Hour of day at which the shift nominally closes
    pub shift_end_hour: u32,
    /// Hourly arrival rates, one entry per hour from shift start; hours
    /// beyond the table (or before opening) have rate 0
    pub rate_table: Vec<f64>,
    /// Exponential service rate of the single server
    pub service_rate: f64,
    /// Upper-bound arrival rate for the thinning sampler
    pub max_arrival_rate: f64,
    /// Number of independent shift runs
    pub runs: usize,
    /// Random seed; entropy-based when unset
    pub seed: Option<u64>,
    /// Output format for the aggregate summary
    pub output_format: OutputFormat,
    /// Whether to keep and report the full logs of the first run
    pub show_first_run: bool,
}

/// Partial configuration as read from a JSON file; unset fields fall back to
/// defaults during merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    shift_start_hour: Option<u32>,
    shift_end_hour: Option<u32>,
    rate_table: Option<Vec<f64>>,
    service_rate: Option<f64>,
    max_arrival_rate: Option<f64>,
    runs: Option<usize>,
    seed: Option<u64>,
    output_format: Option<OutputFormat>,
    show_first_run: Option<bool>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shift_start_hour: 9,
            shift_end_hour: 23,
            rate_table: DEFAULT_RATE_TABLE.to_vec(),
            service_rate: 2.03,
            max_arrival_rate: 15.0,
            runs: 90,
            seed: None,
            output_format: OutputFormat::Text,
            show_first_run: false,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> SimulationResult<Self> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        config.apply_cli_overrides(args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let content = fs::read_to_string(path)?;
        let config_file: ConfigFile = serde_json::from_str(&content)?;
        Ok(Self::from_config_file(config_file))
    }

    /// Merge a partial config file over the defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            shift_start_hour: config_file.shift_start_hour.unwrap_or(defaults.shift_start_hour),
            shift_end_hour: config_file.shift_end_hour.unwrap_or(defaults.shift_end_hour),
            rate_table: config_file.rate_table.unwrap_or(defaults.rate_table),
            service_rate: config_file.service_rate.unwrap_or(defaults.service_rate),
            max_arrival_rate: config_file.max_arrival_rate.unwrap_or(defaults.max_arrival_rate),
            runs: config_file.runs.unwrap_or(defaults.runs),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            show_first_run: config_file.show_first_run.unwrap_or(defaults.show_first_run),
        }
    }

    /// Apply CLI argument overrides on top of the current configuration
    fn apply_cli_overrides(&mut self, args: CliArgs) -> SimulationResult<()> {
        if let Some(runs) = args.runs {
            self.runs = runs;
        }
        if let Some(start) = args.shift_start_hour {
            self.shift_start_hour = start;
        }
        if let Some(end) = args.shift_end_hour {
            self.shift_end_hour = end;
        }
        if let Some(rate) = args.service_rate {
            self.service_rate = rate;
        }
        if let Some(bound) = args.max_arrival_rate {
            self.max_arrival_rate = bound;
        }
        if let Some(format) = args.output_format {
            self.output_format = format.parse().map_err(SimulationError::invariant)?;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.show_first_run {
            self.show_first_run = true;
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Nominal shift length in simulation hours
    pub fn shift_length(&self) -> f64 {
        f64::from(self.shift_end_hour.saturating_sub(self.shift_start_hour))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for &hour in [self.shift_start_hour, self.shift_end_hour].iter() {
            if hour > 24 {
                return Err(ConfigValidationError::ShiftHourOutOfRange(hour));
            }
        }
        if self.shift_end_hour < self.shift_start_hour {
            return Err(ConfigValidationError::InvertedShiftWindow {
                start: self.shift_start_hour,
                end: self.shift_end_hour,
            });
        }
        if self.service_rate <= 0.0 {
            return Err(ConfigValidationError::NonPositiveServiceRate(self.service_rate));
        }
        if self.max_arrival_rate <= 0.0 {
            return Err(ConfigValidationError::NonPositiveBoundRate(self.max_arrival_rate));
        }
        for (hour, &rate) in self.rate_table.iter().enumerate() {
            if rate < 0.0 {
                return Err(ConfigValidationError::NegativeArrivalRate { hour, rate });
            }
            if rate > self.max_arrival_rate {
                return Err(ConfigValidationError::UnderestimatedPeakRate {
                    hour,
                    rate,
                    bound: self.max_arrival_rate,
                });
            }
        }
        if self.runs == 0 {
            return Err(ConfigValidationError::ZeroRuns);
        }
        Ok(())
    }
}
