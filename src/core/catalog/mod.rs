//! Curriculum catalog and its query layer
//!
//! A [`Catalog`] holds the ordered semester and course records. It is built once
//! (from the embedded dataset or a data file) and never mutated. Presentation
//! code reads it only through the methods here.

pub mod loader;
pub mod validate;

pub use loader::{load_catalog, parse_catalog_file, parse_catalog_json, parse_catalog_toml};
pub use validate::{validate, ValidationReport};

use crate::core::models::{Course, Semester};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded curriculum dataset
const BUILTIN_CURRICULUM: &str = include_str!("../../assets/curriculum.toml");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    parse_catalog_toml(BUILTIN_CURRICULUM).expect("Failed to parse compiled-in curriculum dataset")
});

/// Ordered collection of semesters and courses
///
/// Course order is the source order of the dataset. It is the display order and
/// defines previous/next adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    semesters: Vec<Semester>,
    #[serde(default)]
    courses: Vec<Course>,
}

/// Courses immediately before and after a course in source order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    /// Preceding course, absent for the first course
    pub previous: Option<&'a Course>,
    /// Following course, absent for the last course
    pub next: Option<&'a Course>,
}

impl Catalog {
    /// Create a catalog from already-ordered records
    #[must_use]
    pub const fn new(semesters: Vec<Semester>, courses: Vec<Course>) -> Self {
        Self { semesters, courses }
    }

    /// The embedded Prompt School curriculum
    ///
    /// Parsed on first access and shared for the lifetime of the process.
    ///
    /// # Panics
    /// Panics if the compiled-in dataset is not valid TOML for the catalog schema.
    /// The dataset is checked by the test suite, so this does not happen in practice.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// All semesters in source order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// All courses in source order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a semester by its number
    #[must_use]
    pub fn semester(&self, number: u8) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.number == number)
    }

    /// Name of the semester a course belongs to, if that semester exists
    #[must_use]
    pub fn semester_name(&self, course: &Course) -> Option<&str> {
        self.semester(course.semester).map(|s| s.name.as_str())
    }

    /// Courses of one semester, in source order
    ///
    /// An unknown semester number yields an empty list.
    #[must_use]
    pub fn courses_by_semester(&self, number: u8) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.semester == number).collect()
    }

    /// Look up a course by slug (exact match, first hit)
    #[must_use]
    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }

    /// Zero-based position of a course in source order
    #[must_use]
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.slug == slug)
    }

    /// Previous and next courses of `slug` in source order
    ///
    /// Adjacency is linear: the first course has no previous course and the last
    /// has no next course. Returns `None` when `slug` is unknown.
    #[must_use]
    pub fn neighbors(&self, slug: &str) -> Option<Neighbors<'_>> {
        let index = self.position(slug)?;
        Some(Neighbors {
            previous: index.checked_sub(1).and_then(|i| self.courses.get(i)),
            next: self.courses.get(index + 1),
        })
    }

    /// Resolve a course's prerequisites, skipping slugs that match no course
    #[must_use]
    pub fn prerequisites_of(&self, course: &Course) -> Vec<&Course> {
        course
            .prerequisites
            .iter()
            .filter_map(|slug| {
                let found = self.course_by_slug(slug);
                if found.is_none() {
                    debug!("{}: skipping unknown prerequisite '{slug}'", course.slug);
                }
                found
            })
            .collect()
    }

    /// Courses that list `slug` as a prerequisite, in source order
    #[must_use]
    pub fn required_by(&self, slug: &str) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.requires(slug)).collect()
    }
}
