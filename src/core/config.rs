//! Configuration for the `promptschool` CLI
//!
//! Settings live in a TOML file under the platform config directory. Values may
//! reference that directory as `$PROMPT_SCHOOL`; it is expanded on load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Compiled-in defaults, chosen by build profile
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to [`Config::get_prompt_school_dir`]
const DIR_VARIABLE: &str = "$PROMPT_SCHOOL";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 8] = [
    "level",
    "file",
    "verbose",
    "title",
    "base_path",
    "out_dir",
    "data_file",
    "exports_dir",
];

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty disables file logging
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Site presentation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title shown in page titles and the nav bar
    #[serde(default)]
    pub title: String,
    /// URL prefix the site is served under
    #[serde(default)]
    pub base_path: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory the site is built into
    #[serde(default)]
    pub out_dir: String,
    /// Curriculum data file (TOML or JSON); empty uses the built-in catalog
    #[serde(default)]
    pub data_file: String,
    /// Directory for catalog exports
    #[serde(default)]
    pub exports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Site settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override site output directory
    pub out_dir: Option<String>,
    /// Override curriculum data file
    pub data_file: Option<String>,
    /// Override site base path
    pub base_path: Option<String>,
}

/// Copy `default` into `value` when `value` is empty and `default` is not
fn fill_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$PROMPT_SCHOOL` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/promptschool`
    /// - macOS: `~/Library/Application Support/promptschool`
    /// - Windows: `%APPDATA%\promptschool`
    #[must_use]
    pub fn get_prompt_school_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("promptschool")
    }

    /// Fill empty fields from defaults
    ///
    /// Used on load so that fields added in newer versions get their default
    /// values without touching user settings. `verbose` is never merged since
    /// `false` is a legitimate user choice.
    ///
    /// Returns `true` if any field changed.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        [
            fill_empty(&mut self.logging.level, &defaults.logging.level),
            fill_empty(&mut self.logging.file, &defaults.logging.file),
            fill_empty(&mut self.site.title, &defaults.site.title),
            fill_empty(&mut self.site.base_path, &defaults.site.base_path),
            fill_empty(&mut self.paths.out_dir, &defaults.paths.out_dir),
            fill_empty(&mut self.paths.data_file, &defaults.paths.data_file),
            fill_empty(&mut self.paths.exports_dir, &defaults.paths.exports_dir),
        ]
        .contains(&true)
    }

    /// Apply CLI-provided overrides for this run only
    ///
    /// Only `Some` values replace config values; nothing is written to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir = Self::expand_variables(out_dir);
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file = Self::expand_variables(data_file);
        }
        if let Some(base_path) = &overrides.base_path {
            self.site.base_path.clone_from(base_path);
        }
    }

    /// Full path of the user config file
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_prompt_school_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$PROMPT_SCHOOL` in a string
    ///
    /// ```ignore
    /// let expanded = Config::expand_variables("$PROMPT_SCHOOL/site");
    /// // "/home/user/.config/promptschool/site"
    /// ```
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_prompt_school_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse config from a TOML string, expanding `$PROMPT_SCHOOL` in path values
    ///
    /// Missing fields take their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Compiled-in default configuration for the current build profile
    ///
    /// # Panics
    /// Panics if the embedded defaults are not valid TOML. They are compiled in
    /// and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, creating it from defaults on first run
    ///
    /// An existing file gets missing fields merged in from the defaults and is
    /// re-saved if anything changed. Any read or parse failure falls back to
    /// the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// See [`CONFIG_KEYS`]; dashed spellings (`base-path`) are accepted too.
    /// Returns `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "title" => Some(self.site.title.clone()),
            "base_path" | "base-path" => Some(self.site.base_path.clone()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    /// (e.g. `verbose = maybe`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<crate::logger::Level>()?;
                self.logging.level = value.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "title" => self.site.title = value.to_string(),
            "base_path" | "base-path" => {
                if !value.starts_with('/') {
                    return Err(format!("Invalid base path '{value}': must start with '/'"));
                }
                self.site.base_path = value.to_string();
            }
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "data_file" | "data-file" => self.paths.data_file = value.to_string(),
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single value to its default
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "title" => self.site.title.clone_from(&defaults.site.title),
            "base_path" | "base-path" => self.site.base_path.clone_from(&defaults.site.base_path),
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "data_file" | "data-file" => {
                self.paths.data_file.clone_from(&defaults.paths.data_file);
            }
            "exports_dir" | "exports-dir" => {
                self.paths.exports_dir.clone_from(&defaults.paths.exports_dir);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load`](Config::load) recreates it
    ///
    /// Succeeds if there is no file. The CLI asks for confirmation first.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[site]")?;
        writeln!(f, "  title = \"{}\"", self.site.title)?;
        writeln!(f, "  base_path = \"{}\"", self.site.base_path)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        Ok(())
    }
}
