//! Tests for CLI argument parsing.

use clap::Parser;
use relay_locator::config::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_output_path_is_required() {
    let result = Config::try_parse_from(["relay_locator"]);
    assert!(result.is_err(), "missing output path should be rejected");
}

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["relay_locator", "relays_geo.csv"])
        .expect("Should parse with just the output path");

    assert_eq!(config.output, PathBuf::from("relays_geo.csv"));
    assert_eq!(config.dataset, PathBuf::from("dbip-city-ipv4-num.csv"));
    assert_eq!(config.input, None);
    assert_eq!(config.max_concurrency, 64);
    // LogLevel/LogFormat don't implement PartialEq, so compare via conversion
    // and variant match.
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Info
    );
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("default log format should be plain"),
    }
}

#[test]
fn test_dataset_override() {
    let config = Config::try_parse_from(["relay_locator", "out.csv", "--db", "/tmp/ranges.csv"])
        .expect("Should parse --db override");
    assert_eq!(config.dataset, PathBuf::from("/tmp/ranges.csv"));
}

#[test]
fn test_input_file_option() {
    let config = Config::try_parse_from(["relay_locator", "out.csv", "--input", "relays.txt"])
        .expect("Should parse --input");
    assert_eq!(config.input, Some(PathBuf::from("relays.txt")));
}

#[test]
fn test_max_concurrency_override() {
    let config = Config::try_parse_from(["relay_locator", "out.csv", "--max-concurrency", "8"])
        .expect("Should parse --max-concurrency");
    assert_eq!(config.max_concurrency, 8);
}

#[test]
fn test_log_options() {
    let config = Config::try_parse_from([
        "relay_locator",
        "out.csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse log options");

    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    match config.log_format {
        LogFormat::Json => {}
        LogFormat::Plain => panic!("log format should be json"),
    }
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::try_parse_from(["relay_locator", "out.csv", "--log-level", "verbose"]);
    assert!(result.is_err());
}

#[test]
fn test_default_construction_matches_cli_defaults() {
    let from_cli = Config::try_parse_from(["relay_locator", "relays_geo.csv"]).unwrap();
    let programmatic = Config {
        output: PathBuf::from("relays_geo.csv"),
        ..Default::default()
    };

    assert_eq!(from_cli.output, programmatic.output);
    assert_eq!(from_cli.dataset, programmatic.dataset);
    assert_eq!(from_cli.max_concurrency, programmatic.max_concurrency);
    assert_eq!(
        log::LevelFilter::from(from_cli.log_level),
        log::LevelFilter::from(LogLevel::Info)
    );
}
