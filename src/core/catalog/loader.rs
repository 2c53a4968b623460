//! Loading curriculum data files
//!
//! Data files use the same shape as the embedded dataset: a list of
//! `[[semesters]]` and a list of `[[courses]]`, each course carrying its units
//! and reading links. TOML is the default; files ending in `.json` are read as
//! JSON.

use super::{validate, Catalog};
use crate::{info, warn};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog from a TOML string without validating it
///
/// # Errors
/// Returns an error if the TOML is malformed or does not match the catalog schema
pub fn parse_catalog_toml(toml_str: &str) -> Result<Catalog, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Parse a catalog from a JSON string without validating it
///
/// # Errors
/// Returns an error if the JSON is malformed or does not match the catalog schema
pub fn parse_catalog_json(json_str: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(json_str)
}

/// Read and parse a curriculum data file without validating it
///
/// Files ending in `.json` are parsed as JSON, anything else as TOML.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let catalog = if is_json {
        parse_catalog_json(&content)?
    } else {
        parse_catalog_toml(&content)?
    };
    Ok(catalog)
}

/// Load and validate a curriculum data file
///
/// Validation warnings are logged and tolerated. Validation errors fail the load
/// with every error message joined into one.
///
/// # Arguments
/// * `path` - Path to a `.toml` or `.json` data file
///
/// # Errors
/// Returns an error if the file cannot be read, cannot be parsed, or fails validation
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let catalog = parse_catalog_file(path)?;

    let report = validate(&catalog);
    for warning in &report.warnings {
        warn!("{}: {warning}", path.display());
    }
    report.into_result()?;

    info!(
        "Loaded {} courses in {} semesters from {}",
        catalog.len(),
        catalog.semesters().len(),
        path.display()
    );

    Ok(catalog)
}
