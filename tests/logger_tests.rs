//! Integration tests for logger behavior.

use prompt_school::logger::{
    close_file_logging, init_file_logging, level, set_level, set_level_from_str, Level,
};
use prompt_school::{debug, error, get_version, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert_eq!(level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_writes_messages() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("promptschool.log");

    assert!(init_file_logging(&path));
    error!("written to file");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("log file exists");
    assert!(content.contains("written to file"));
}

#[test]
fn version_is_not_empty() {
    assert!(!get_version().trim().is_empty());
}
