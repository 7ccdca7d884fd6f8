// Service Counter Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/service-counter-sim
// ```
//
// Or with custom settings:
//
// ```console
// $ ./target/release/service-counter-sim --runs 500 --seed 42 --show-first-run
// ```

use clap::Parser;
use service_counter_sim::report;
use service_counter_sim::types::config::CliArgs;
use service_counter_sim::{
    LoggingConfig, OutputFormat, SimulationConfig, SimulationOrchestrator, SimulationSummary,
};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting service counter simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    let mut orchestrator = match SimulationOrchestrator::new(config.clone()) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("Failed to initialize simulation: {}", e);
            process::exit(1);
        }
    };

    let summary = match orchestrator.run_all() {
        Ok(summary) => summary,
        Err(e) => {
            error!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_results(&config, &summary) {
        error!("Failed to render results: {}", e);
        process::exit(1);
    }

    info!("Service counter simulator completed successfully");
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!(
        "  Shift: {:02}:00 - {:02}:00 ({} hours)",
        config.shift_start_hour,
        config.shift_end_hour,
        config.shift_length()
    );
    eprintln!("  Rate table entries: {}", config.rate_table.len());
    eprintln!("  Service rate: {}", config.service_rate);
    eprintln!("  Thinning upper-bound rate: {}", config.max_arrival_rate);
    eprintln!("  Runs: {}", config.runs);
    eprintln!("  Output format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random seed: {}", seed);
    }
    eprintln!();
}

/// Print the per-run tables (when kept) and the aggregate summary
fn print_results(
    config: &SimulationConfig,
    summary: &SimulationSummary,
) -> service_counter_sim::SimulationResult<()> {
    let first_run_clients = summary.first_run.as_ref().map(|r| r.clients.len());

    if let Some(first_run) = &summary.first_run {
        println!("{}", report::render_event_table(&first_run.events, config.shift_start_hour));
        println!();
        println!(
            "{}",
            report::render_client_table(&first_run.clients, config.shift_start_hour)
        );
        println!();
    }

    match config.output_format {
        OutputFormat::Text => {
            println!("{}", report::render_summary(&summary.aggregate, config, first_run_clients));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                report::render_summary_json(&summary.aggregate, config, first_run_clients)?
            );
        }
    }
    Ok(())
}
