//! Integration tests for configuration management

use prompt_school::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
    assert!(
        config.paths.data_file.is_empty(),
        "Default data_file selects the built-in catalog"
    );
    assert_eq!(config.site.title, "Prompt School");
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[site]
title = "Night School"
base_path = "/school/"

[paths]
out_dir = "./public"
data_file = "./curriculum.json"
exports_dir = "./exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.site.title, "Night School");
    assert_eq!(config.site.base_path, "/school/");
    assert_eq!(config.paths.out_dir, "./public");
    assert_eq!(config.paths.data_file, "./curriculum.json");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.site.title, "");
    assert_eq!(config.paths.out_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$PROMPT_SCHOOL/logs/promptschool.log"

[paths]
out_dir = "$PROMPT_SCHOOL/site"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("promptschool"));
    assert!(!config.logging.file.contains("$PROMPT_SCHOOL"));
    assert!(config.paths.out_dir.ends_with("site"));
    assert!(!config.paths.out_dir.contains("$PROMPT_SCHOOL"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("title", "Prompt Academy").expect("Failed to set title");
    assert_eq!(config.get("title").unwrap(), "Prompt Academy");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("out_dir", "/elsewhere").expect("Failed to set out_dir");
    config
        .unset("out_dir", &defaults)
        .expect("Failed to unset out_dir");
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("base_path", "/school/").expect("Failed to set base_path");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.site.base_path, "/school/");
    assert_eq!(loaded.logging.level, config.logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        out_dir: Some("./custom_site".to_string()),
        data_file: Some("./custom.toml".to_string()),
        base_path: Some("/custom/".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "./custom_site");
    assert_eq!(config.paths.data_file, "./custom.toml");
    assert_eq!(config.site.base_path, "/custom/");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = format!("{}", Config::from_defaults());

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[site]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("base_path"));
    assert!(display_str.contains("exports_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[site]
title = ""

[paths]
out_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.site.title, defaults.site.title);
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[site]
title = "My School"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.site.title, "My School");
}

#[test]
fn test_get_prompt_school_dir() {
    let dir = Config::get_prompt_school_dir();

    assert!(dir.to_string_lossy().contains("promptschool"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
