//! Load-time validation of curriculum data
//!
//! Errors are structural problems that would break lookups or navigation
//! (duplicate keys, unknown semesters, prerequisite cycles). Warnings cover data
//! the renderer tolerates, such as prerequisites that resolve to no course.

use super::Catalog;
use crate::core::models::Course;
use std::collections::{HashMap, HashSet, VecDeque};

/// Outcome of validating a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the catalog unusable
    pub errors: Vec<String>,
    /// Problems the renderer tolerates
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether no errors were found (warnings allowed)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether neither errors nor warnings were found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Convert into a `Result`, joining error messages
    ///
    /// # Errors
    /// Returns `Err` with one line per validation error
    pub fn into_result(self) -> Result<(), String> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Curriculum data is invalid:\n  {}",
                self.errors.join("\n  ")
            ))
        }
    }
}

/// Validate a catalog
#[must_use]
pub fn validate(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_semesters(catalog, &mut report);
    check_keys(catalog, &mut report);
    check_courses(catalog, &mut report);
    check_cycles(catalog, &mut report);

    report
}

fn check_semesters(catalog: &Catalog, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for semester in catalog.semesters() {
        if !seen.insert(semester.number) {
            report
                .errors
                .push(format!("Semester {} is defined more than once", semester.number));
        }
    }
}

/// Slugs and codes must be unique; slugs must be URL-safe
fn check_keys(catalog: &Catalog, report: &mut ValidationReport) {
    let mut slugs = HashSet::new();
    let mut codes = HashSet::new();

    for (index, course) in catalog.courses().iter().enumerate() {
        if !is_url_safe(&course.slug) {
            report.errors.push(format!(
                "Course #{} ('{}'): slug '{}' must be non-empty and use only a-z, 0-9 and '-'",
                index + 1,
                course.code,
                course.slug
            ));
        }
        if !slugs.insert(course.slug.as_str()) {
            report
                .errors
                .push(format!("Duplicate course slug '{}'", course.slug));
        }
        if !codes.insert(course.code.as_str()) {
            report
                .errors
                .push(format!("Duplicate course code '{}'", course.code));
        }
    }
}

fn check_courses(catalog: &Catalog, report: &mut ValidationReport) {
    for course in catalog.courses() {
        if catalog.semester(course.semester).is_none() {
            report.errors.push(format!(
                "Course '{}': semester {} does not exist",
                course.slug, course.semester
            ));
        }

        for prereq in &course.prerequisites {
            if prereq == &course.slug {
                report
                    .errors
                    .push(format!("Course '{}': lists itself as a prerequisite", course.slug));
            } else if catalog.course_by_slug(prereq).is_none() {
                report.warnings.push(format!(
                    "Course '{}': prerequisite '{prereq}' not found",
                    course.slug
                ));
            }
        }

        if course.units.is_empty() {
            report
                .warnings
                .push(format!("Course '{}': has no units", course.slug));
        }
    }
}

/// Detect prerequisite cycles with Kahn's algorithm over resolvable edges
///
/// Self-references are reported by `check_courses` and left out here.
fn check_cycles(catalog: &Catalog, report: &mut ValidationReport) {
    let courses = catalog.courses();
    let known: HashSet<&str> = courses.iter().map(|c| c.slug.as_str()).collect();

    // prerequisite -> courses that require it
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut indegree: HashMap<&str, usize> = HashMap::new();

    for course in courses {
        indegree.entry(course.slug.as_str()).or_insert(0);
        for prereq in unique_prerequisites(course) {
            if prereq == course.slug || !known.contains(prereq) {
                continue;
            }
            dependents
                .entry(prereq)
                .or_default()
                .push(course.slug.as_str());
            *indegree.entry(course.slug.as_str()).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<&str> = courses
        .iter()
        .map(|c| c.slug.as_str())
        .filter(|slug| indegree.get(slug).copied().unwrap_or(0) == 0)
        .collect();
    let mut ordered = HashSet::new();

    while let Some(slug) = queue.pop_front() {
        if !ordered.insert(slug) {
            continue;
        }
        for &child in dependents.get(slug).into_iter().flatten() {
            if let Some(entry) = indegree.get_mut(child) {
                *entry = entry.saturating_sub(1);
                if *entry == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    let mut stuck: Vec<&str> = courses
        .iter()
        .map(|c| c.slug.as_str())
        .filter(|slug| !ordered.contains(slug))
        .collect();
    stuck.dedup();

    if !stuck.is_empty() {
        report.errors.push(format!(
            "Prerequisite cycle involving: {}",
            stuck.join(", ")
        ));
    }
}

fn unique_prerequisites(course: &Course) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    course
        .prerequisites
        .iter()
        .map(String::as_str)
        .filter(move |p| seen.insert(*p))
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
