//! CLI command handlers for `promptschool`.
//!
//! Each command is implemented in its own submodule. Handlers other than
//! `config` return `Err` with a user-facing message; `main` prints it and
//! exits with status 1.

pub mod build;
pub mod catalog;
pub mod config;
pub mod export;
pub mod validate;

use prompt_school::config::Config;
use prompt_school::core::catalog::{load_catalog, Catalog};
use prompt_school::debug;
use std::borrow::Cow;

/// Catalog selected by config `data_file`, or the built-in one when unset
///
/// # Errors
/// Returns an error message if the data file cannot be loaded or is invalid
pub fn load(config: &Config) -> Result<Cow<'static, Catalog>, String> {
    if config.paths.data_file.is_empty() {
        debug!("Using built-in curriculum");
        return Ok(Cow::Borrowed(Catalog::builtin()));
    }

    load_catalog(&config.paths.data_file)
        .map(Cow::Owned)
        .map_err(|e| format!("✗ Failed to load {}: {e}", config.paths.data_file))
}
