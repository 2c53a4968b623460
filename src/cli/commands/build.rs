//! Build command handler
//!
//! Renders the static site into the configured output directory.

use prompt_school::config::Config;
use prompt_school::core::site::{HtmlSite, SiteContext, SiteGenerator, SiteSettings};
use prompt_school::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the build command.
///
/// # Arguments
/// * `output` - Optional output directory; defaults to config `out_dir`
/// * `clean` - Remove the output directory first
/// * `config` - Loaded configuration
///
/// # Errors
/// Returns a user-facing message if loading, rendering or writing fails
pub fn run(output: Option<&Path>, clean: bool, config: &Config) -> Result<(), String> {
    let out_dir = output.map_or_else(|| PathBuf::from(&config.paths.out_dir), Path::to_path_buf);
    if out_dir.as_os_str().is_empty() {
        return Err("✗ No output directory: pass --output or set out_dir".to_string());
    }

    let catalog = super::load(config)?;
    let settings = SiteSettings::from_config(config);

    if clean && out_dir.exists() {
        info!("Removing {}", out_dir.display());
        fs::remove_dir_all(&out_dir)
            .map_err(|e| format!("✗ Failed to clean {}: {e}", out_dir.display()))?;
    }

    let ctx = SiteContext::new(&catalog, &settings);
    let written = HtmlSite::new().generate(&ctx, &out_dir).map_err(|e| {
        error!("Site build failed for {}: {e}", out_dir.display());
        format!("✗ Failed to build site in {}: {e}", out_dir.display())
    })?;

    for path in &written {
        verbose!("  wrote {}", path.display());
    }

    println!("✓ Site built: {}", out_dir.display());
    println!(
        "  {} pages for {} courses in {} semesters (base path {})",
        written.len() - 1,
        catalog.len(),
        catalog.semesters().len(),
        settings.base_path
    );
    Ok(())
}
