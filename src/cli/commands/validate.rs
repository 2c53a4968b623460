//! Validate command handler

use prompt_school::config::Config;
use prompt_school::core::catalog::{parse_catalog_file, validate, Catalog};
use std::borrow::Cow;

/// Parse the configured data file (or the built-in catalog) without validating
fn parse(config: &Config) -> Result<(String, Cow<'static, Catalog>), String> {
    let data_file = &config.paths.data_file;
    if data_file.is_empty() {
        return Ok(("built-in curriculum".to_string(), Cow::Borrowed(Catalog::builtin())));
    }

    let catalog =
        parse_catalog_file(data_file).map_err(|e| format!("✗ Failed to parse {data_file}: {e}"))?;
    Ok((data_file.clone(), Cow::Owned(catalog)))
}

/// Run the validate command.
///
/// Prints every error and warning. Warnings alone do not fail.
///
/// # Errors
/// Returns a summary message if the data cannot be parsed or has errors
pub fn run(config: &Config) -> Result<(), String> {
    let (source, catalog) = parse(config)?;
    let report = validate(&catalog);

    for error in &report.errors {
        println!("✗ {error}");
    }
    for warning in &report.warnings {
        println!("⚠ {warning}");
    }

    if report.is_valid() {
        println!(
            "✓ {source} is valid: {} courses in {} semesters ({} warnings)",
            catalog.len(),
            catalog.semesters().len(),
            report.warnings.len()
        );
        Ok(())
    } else {
        Err(format!("✗ {source} has {} errors", report.errors.len()))
    }
}
