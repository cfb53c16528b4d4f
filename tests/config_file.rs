// tests/config_file.rs

use std::io::Write;
use std::time::Duration;

use plantsim::cli::CliArgs;
use plantsim::config::load_and_validate;
use plantsim::errors::PlantError;
use tempfile::NamedTempFile;

#[test]
fn full_config_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[run]
lines = 2
iterations = 5
deadline_secs = 12

[work]
min_delay_ms = 10
max_delay_ms = 40
failure_probability = 0.5
seed = 9
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.run().number_of_lines, 2);
    assert_eq!(cfg.run().max_iterations, 5);
    assert_eq!(cfg.run().overall_deadline, Duration::from_secs(12));
    assert_eq!(cfg.work().min_delay, Duration::from_millis(10));
    assert_eq!(cfg.work().max_delay, Duration::from_millis(40));
    assert_eq!(cfg.work().failure_probability, 0.5);
    assert_eq!(cfg.work().seed, Some(9));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\nlines = 6\n").unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.run().number_of_lines, 6);
    assert_eq!(cfg.run().max_iterations, 10);
    assert_eq!(cfg.work().failure_probability, 0.3);
    assert_eq!(cfg.work().seed, None);
}

#[test]
fn zero_lines_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\nlines = 0\n").unwrap();

    match load_and_validate(file.path()) {
        Err(PlantError::ConfigError(msg)) => assert!(msg.contains("lines")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run\nlines = ").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(PlantError::TomlError(_))
    ));
}

#[test]
fn missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(PlantError::IoError(_))
    ));
}

#[test]
fn cli_flags_override_file_values() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\nlines = 6\niterations = 2\n").unwrap();

    let args = CliArgs {
        config: Some(file.path().to_path_buf()),
        lines: Some(3),
        ..CliArgs::default()
    };
    let cfg = plantsim::resolve_config(&args).unwrap();

    assert_eq!(cfg.run().number_of_lines, 3);
    assert_eq!(cfg.run().max_iterations, 2);
}
