//! Configuration loading, precedence, and validation.

use clap::Parser;
use service_counter_sim::{
    CliArgs, ConfigValidationError, OutputFormat, SimulationConfig, SimulationError,
    SimulationOrchestrator,
};
use std::io::Write;

fn write_config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn config_file_merges_over_defaults() {
    let file = write_config_file(
        r#"{
            "runs": 12,
            "seed": 99,
            "rate_table": [0.5, 0.7],
            "shift_start_hour": 8,
            "shift_end_hour": 10
        }"#,
    );

    let config = SimulationConfig::from_file(file.path()).unwrap();
    assert_eq!(config.runs, 12);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.rate_table, vec![0.5, 0.7]);
    assert_eq!(config.shift_start_hour, 8);
    // Untouched fields keep their defaults.
    assert_eq!(config.service_rate, 2.03);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn cli_arguments_override_the_config_file() {
    let file = write_config_file(r#"{ "runs": 12, "seed": 99 }"#);
    let path = file.path().display().to_string();

    let args = CliArgs::parse_from([
        "service-counter-sim",
        "--config",
        &path,
        "--runs",
        "3",
        "--output-format",
        "json",
    ]);
    let config = SimulationConfig::from_cli_args(args).unwrap();

    assert_eq!(config.runs, 3, "CLI wins over the file");
    assert_eq!(config.seed, Some(99), "file wins over the default");
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let args =
        CliArgs::parse_from(["service-counter-sim", "--config", "/no/such/file.json"]);
    let error = SimulationConfig::from_cli_args(args).unwrap_err();
    assert!(matches!(error, SimulationError::Io(_)));
}

#[test]
fn malformed_config_file_is_a_serialization_error() {
    let file = write_config_file("{ not json");
    let error = SimulationConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(error, SimulationError::Serialization(_)));
}

#[test]
fn unknown_output_format_is_rejected() {
    let args = CliArgs::parse_from(["service-counter-sim", "--output-format", "yaml"]);
    assert!(SimulationConfig::from_cli_args(args).is_err());
}

#[test]
fn orchestrator_rejects_an_underestimated_bound() {
    let config = SimulationConfig {
        rate_table: vec![0.5, 3.0],
        max_arrival_rate: 1.0,
        ..Default::default()
    };
    let error = SimulationOrchestrator::new(config).unwrap_err();
    match error {
        SimulationError::Configuration(ConfigValidationError::UnderestimatedPeakRate {
            hour,
            rate,
            bound,
        }) => {
            assert_eq!(hour, 1);
            assert_eq!(rate, 3.0);
            assert_eq!(bound, 1.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn printed_default_config_parses_back() {
    let json = SimulationConfig::default().print_json().unwrap();
    let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, SimulationConfig::default());
}
