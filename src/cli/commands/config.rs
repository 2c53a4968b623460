//! Config command handler

use crate::args::ConfigSubcommand;
use prompt_school::config::{Config, CONFIG_KEYS};
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn unknown_key(key: &str) -> ! {
    exit_with(&format!(
        "Unknown config key: '{key}' (known keys: {})",
        CONFIG_KEYS.join(", ")
    ));
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        println!("File: {}\n", Config::get_config_file_path().display());
        print!("{config}");
        return;
    };

    match config.get(&key) {
        Some(value) => println!("{value}"),
        None => unknown_key(&key),
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if config.get(key).is_none() {
        unknown_key(key);
    }
    if let Err(e) = config.set(key, value) {
        exit_with(&e);
    }
    if let Err(e) = config.save() {
        exit_with(&format!("Failed to save config: {e}"));
    }

    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if config.unset(key, defaults).is_err() {
        unknown_key(key);
    }
    if let Err(e) = config.save() {
        exit_with(&format!("Failed to save config: {e}"));
    }

    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            exit_with(&format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
