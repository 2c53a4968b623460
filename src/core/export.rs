//! Catalog export
//!
//! Writes the catalog as JSON or TOML (same shape the loader reads) or as a
//! single Markdown syllabus document.

use crate::core::catalog::Catalog;
use crate::core::models::{Course, Unit};
use crate::core::site::SiteSettings;
use std::error::Error;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Embedded Markdown syllabus template
const SYLLABUS_TEMPLATE: &str = include_str!("../assets/syllabus.md");

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON data file
    Json,
    /// TOML data file
    Toml,
    /// Human-readable syllabus
    Markdown,
}

impl ExportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Markdown => "md",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Serialize a catalog in the given format
///
/// JSON and TOML output can be loaded back with
/// [`load_catalog`](crate::core::catalog::load_catalog).
///
/// # Errors
/// Returns an error if serialization fails
pub fn export_catalog(
    catalog: &Catalog,
    format: ExportFormat,
    settings: &SiteSettings,
) -> Result<String, Box<dyn Error>> {
    let output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(catalog)?,
        ExportFormat::Toml => toml::to_string_pretty(catalog)?,
        ExportFormat::Markdown => render_syllabus(catalog, settings),
    };
    Ok(output)
}

/// Render the Markdown syllabus
#[must_use]
pub fn render_syllabus(catalog: &Catalog, settings: &SiteSettings) -> String {
    let mut output = SYLLABUS_TEMPLATE.to_string();

    output = output.replace("{{title}}", &settings.title);
    output = output.replace("{{course_count}}", &catalog.len().to_string());
    output = output.replace("{{semester_count}}", &catalog.semesters().len().to_string());
    output = output.replace("{{table_of_contents}}", &table_of_contents(catalog));
    output = output.replace("{{semesters}}", &semester_sections(catalog, settings));

    output
}

fn table_of_contents(catalog: &Catalog) -> String {
    let mut toc = String::new();
    for semester in catalog.semesters() {
        let _ = writeln!(toc, "- {}", semester.label());
        for course in catalog.courses_by_semester(semester.number) {
            let _ = writeln!(toc, "  - [{}: {}](#{})", course.code, course.title, course.slug);
        }
    }
    toc.trim_end().to_string()
}

fn semester_sections(catalog: &Catalog, settings: &SiteSettings) -> String {
    let mut out = String::new();
    for semester in catalog.semesters() {
        let _ = writeln!(out, "## {} ({})\n", semester.label(), semester.difficulty);
        for course in catalog.courses_by_semester(semester.number) {
            write_course(&mut out, catalog, settings, course);
        }
    }
    out.trim_end().to_string()
}

fn course_list(courses: &[&Course]) -> String {
    courses
        .iter()
        .map(|c| format!("[{}](#{})", c.code, c.slug))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_course(out: &mut String, catalog: &Catalog, settings: &SiteSettings, course: &Course) {
    let _ = writeln!(out, "<a id=\"{}\"></a>", course.slug);
    let _ = writeln!(out, "### {}: {}\n", course.code, course.title);
    let _ = writeln!(
        out,
        "*{}* | [Course page]({})\n",
        course.difficulty,
        settings.url(&format!("/curriculum/{}/", course.slug))
    );

    if !course.description.is_empty() {
        let _ = writeln!(out, "{}\n", course.description);
    }

    let prerequisites = catalog.prerequisites_of(course);
    if prerequisites.is_empty() {
        let _ = writeln!(out, "**Prerequisites:** none\n");
    } else {
        let _ = writeln!(out, "**Prerequisites:** {}\n", course_list(&prerequisites));
    }

    let unlocks = catalog.required_by(&course.slug);
    if !unlocks.is_empty() {
        let _ = writeln!(out, "**Unlocks:** {}\n", course_list(&unlocks));
    }

    for unit in course.units_in_order() {
        write_unit(out, unit);
    }

    if !course.recommended_reading.is_empty() {
        let _ = writeln!(out, "**Recommended reading**\n");
        for link in &course.recommended_reading {
            let _ = writeln!(out, "- [{}]({})", link.title, link.url);
        }
        out.push('\n');
    }

    if !course.office_hours.is_empty() {
        let _ = writeln!(out, "> **Office hours:** {}\n", course.office_hours);
    }
}

fn write_unit(out: &mut String, unit: &Unit) {
    let _ = writeln!(out, "#### Unit {}: {}\n", unit.number, unit.title);

    if !unit.concepts.is_empty() {
        for concept in &unit.concepts {
            let _ = writeln!(out, "- {concept}");
        }
        out.push('\n');
    }

    for example in &unit.example_prompts {
        if !example.context.is_empty() {
            let _ = writeln!(out, "_{}_\n", example.context);
        }
        let _ = writeln!(out, "```text\n{}\n```\n", example.prompt.trim_end());
    }

    if !unit.assignment.is_empty() {
        let _ = writeln!(out, "**Assignment:** {}\n", unit.assignment);
    }
}
