use runlog::config::{Config, load_from_path, save_to_path};
use runlog::runs::summary::TimeUnit;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_load_config_valid() {
    let temp_file = write_config(
        r#"
        runs_file = "/data/runs.txt"

        [summary]
        recent_days = 14
        default_unit = "monthly"
    "#,
    );

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.runs_file, PathBuf::from("/data/runs.txt"));
    assert_eq!(config.summary.recent_days, 14);
    assert_eq!(config.summary.default_unit, TimeUnit::Monthly);
}

#[test]
fn test_load_config_defaults() {
    let temp_file = write_config("");

    let config = load_from_path(temp_file.path()).expect("Empty config should use defaults");

    assert_eq!(config.runs_file, PathBuf::from("existing_runs.txt"));
    assert_eq!(config.summary.recent_days, 7);
    assert_eq!(config.summary.default_unit, TimeUnit::Weekly);
}

#[test]
fn test_load_config_partial_summary() {
    let temp_file = write_config(
        r#"
        [summary]
        recent_days = 3
    "#,
    );

    let config = load_from_path(temp_file.path()).unwrap();
    assert_eq!(config.summary.recent_days, 3);
    assert_eq!(config.summary.default_unit, TimeUnit::Weekly);
}

#[test]
fn test_load_config_rejects_zero_days() {
    let temp_file = write_config(
        r#"
        [summary]
        recent_days = 0
    "#,
    );

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_load_config_rejects_huge_window() {
    let temp_file = write_config(
        r#"
        [summary]
        recent_days = 4000000000
    "#,
    );

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_load_config_rejects_unknown_unit() {
    let temp_file = write_config(
        r#"
        [summary]
        default_unit = "daily"
    "#,
    );

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_save_then_load() {
    let mut config = Config::default();
    config.summary.recent_days = 10;
    config.runs_file = PathBuf::from("my_runs.txt");

    let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    save_to_path(&config, temp_file.path()).unwrap();

    let loaded = load_from_path(temp_file.path()).unwrap();
    assert_eq!(loaded.summary.recent_days, 10);
    assert_eq!(loaded.runs_file, PathBuf::from("my_runs.txt"));
}
