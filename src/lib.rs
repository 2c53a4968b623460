//! Library crate for `PromptSchool`
//!
//! Holds the curriculum catalog and its query layer, data validation and export,
//! the static site renderer, and the configuration and logging used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
