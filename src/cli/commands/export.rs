//! Export command handler

use prompt_school::config::Config;
use prompt_school::core::export::{export_catalog, ExportFormat};
use prompt_school::core::site::SiteSettings;
use prompt_school::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default export file name, without extension
const EXPORT_STEM: &str = "curriculum";

/// Run the export command.
///
/// # Arguments
/// * `format_str` - Export format (json, toml, markdown)
/// * `output` - Optional output path; defaults to `exports_dir/curriculum.<ext>`
/// * `to_stdout` - Print instead of writing a file
/// * `config` - Loaded configuration
///
/// # Errors
/// Returns a user-facing message on a bad format or a failed load or write
pub fn run(
    format_str: &str,
    output: Option<&Path>,
    to_stdout: bool,
    config: &Config,
) -> Result<(), String> {
    let format = ExportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let catalog = super::load(config)?;
    let settings = SiteSettings::from_config(config);

    let rendered = export_catalog(&catalog, format, &settings).map_err(|e| {
        error!("Export to {format} failed: {e}");
        format!("✗ Failed to export as {format}: {e}")
    })?;

    if to_stdout {
        print!("{rendered}");
        return Ok(());
    }

    let output_path = output.map_or_else(
        || {
            PathBuf::from(&config.paths.exports_dir)
                .join(EXPORT_STEM)
                .with_extension(format.extension())
        },
        Path::to_path_buf,
    );

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("✗ Failed to create directory {}: {e}", parent.display()))?;
    }
    fs::write(&output_path, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!("Exported {} courses as {format}", catalog.len());
    println!("✓ Export written: {}", output_path.display());
    Ok(())
}
