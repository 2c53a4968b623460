//! Core module: curriculum data, queries, rendering, and configuration

pub mod catalog;
pub mod config;
pub mod export;
pub mod models;
pub mod site;
pub mod text;

/// Returns the current version of the `PromptSchool` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
