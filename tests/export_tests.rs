//! Integration tests for catalog export

use prompt_school::core::catalog::{load_catalog, Catalog};
use prompt_school::core::export::{export_catalog, ExportFormat};
use prompt_school::core::site::SiteSettings;
use std::fs;
use tempfile::TempDir;

fn export_to_file(temp_dir: &TempDir, format: ExportFormat) -> std::path::PathBuf {
    let rendered = export_catalog(Catalog::builtin(), format, &SiteSettings::default())
        .expect("export should succeed");
    let path = temp_dir
        .path()
        .join("curriculum")
        .with_extension(format.extension());
    fs::write(&path, rendered).expect("Failed to write export");
    path
}

#[test]
fn test_json_export_loads_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = export_to_file(&temp_dir, ExportFormat::Json);

    let loaded = load_catalog(&path).expect("exported JSON should load");
    assert_eq!(&loaded, Catalog::builtin());
}

#[test]
fn test_toml_export_loads_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = export_to_file(&temp_dir, ExportFormat::Toml);

    let loaded = load_catalog(&path).expect("exported TOML should load");
    assert_eq!(&loaded, Catalog::builtin());
}

#[test]
fn test_markdown_syllabus_structure() {
    let syllabus = export_catalog(
        Catalog::builtin(),
        ExportFormat::Markdown,
        &SiteSettings::default(),
    )
    .expect("export should succeed");

    assert!(syllabus.contains("14 courses across 4 semesters."));
    assert_eq!(syllabus.matches("\n## Semester ").count(), 4);
    assert_eq!(syllabus.matches("\n### PRMT-").count(), 14);
    assert!(syllabus.contains("#### Unit 1: "));
    assert!(syllabus.contains("**Unlocks:** [PRMT-402](#prmt-402)"));
}
