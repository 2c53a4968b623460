//! CLI argument definitions for `promptschool`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use prompt_school::config::ConfigOverrides;
use prompt_school::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to [`Level`] for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `title`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Render the static site.
    ///
    /// Writes the landing page, manifesto, curriculum index, one page per
    /// course, and a 404 page.
    Build {
        /// Output directory (defaults to config `out_dir`)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Remove the output directory before building
        #[arg(long)]
        clean: bool,
    },
    /// List the semesters in order.
    Semesters,
    /// List courses in source order.
    Courses {
        /// Only list courses of this semester
        #[arg(short, long, value_name = "NUMBER")]
        semester: Option<u8>,
    },
    /// Show one course by slug.
    Course {
        /// Course slug (e.g., `prmt-101`)
        #[arg(value_name = "SLUG")]
        slug: String,
    },
    /// Check the curriculum data for errors and warnings.
    Validate,
    /// Export the curriculum data.
    Export {
        /// Export format: json, toml, or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "json")]
        format: String,

        /// Output file path (defaults to config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "promptschool",
    about = "Prompt School catalog and site generator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum, global = true)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH", global = true)]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new(), global = true)]
    pub config_verbose: Option<bool>,

    /// Override config site output directory
    #[arg(long = "config-out-dir", value_name = "DIR", global = true)]
    pub config_out_dir: Option<PathBuf>,

    /// Override config site output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR", global = true)]
    pub out_dir: Option<PathBuf>,

    /// Override config curriculum data file
    #[arg(long = "config-data-file", value_name = "FILE", global = true)]
    pub config_data_file: Option<PathBuf>,

    /// Override config curriculum data file (short form)
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Override config site base path
    #[arg(long = "config-base-path", value_name = "PATH", global = true)]
    pub config_base_path: Option<String>,

    /// Override config site base path (short form)
    #[arg(long = "base-path", value_name = "PATH", global = true)]
    pub base_path: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data`) take precedence over long-form flags
    /// (e.g., `--config-data-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            out_dir: path_string(self.out_dir.as_ref())
                .or_else(|| path_string(self.config_out_dir.as_ref())),
            data_file: path_string(self.data.as_ref())
                .or_else(|| path_string(self.config_data_file.as_ref())),
            base_path: self
                .base_path
                .clone()
                .or_else(|| self.config_base_path.clone()),
        }
    }
}
