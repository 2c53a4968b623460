//! Course model

use super::{Difficulty, Unit};
use crate::core::text::first_sentence;
use serde::{Deserialize, Serialize};

/// A recommended-reading link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingLink {
    /// Link text
    pub title: String,

    /// Target URL
    pub url: String,
}

/// Represents a course in the curriculum
///
/// Field order matters for TOML export: plain values must precede the unit and
/// reading tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Display code (e.g., "PRMT-101")
    pub code: String,

    /// URL-safe identifier and lookup key (e.g., "prmt-101")
    pub slug: String,

    /// Course title
    pub title: String,

    /// Semester ordinal this course belongs to
    pub semester: u8,

    /// Difficulty label
    pub difficulty: Difficulty,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Prerequisites, stored as course slugs
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Office-hours note
    #[serde(default)]
    pub office_hours: String,

    /// Syllabus units
    #[serde(default)]
    pub units: Vec<Unit>,

    /// Recommended reading
    #[serde(default)]
    pub recommended_reading: Vec<ReadingLink>,
}

impl Course {
    /// Create a new course with no description, prerequisites, units, or reading
    ///
    /// # Arguments
    /// * `code` - Display code
    /// * `slug` - Lookup key
    /// * `title` - Course title
    /// * `semester` - Semester ordinal
    /// * `difficulty` - Difficulty label
    #[must_use]
    pub const fn new(
        code: String,
        slug: String,
        title: String,
        semester: u8,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            code,
            slug,
            title,
            semester,
            difficulty,
            description: String::new(),
            prerequisites: Vec::new(),
            office_hours: String::new(),
            units: Vec::new(),
            recommended_reading: Vec::new(),
        }
    }

    /// Add a prerequisite by slug
    pub fn add_prerequisite(&mut self, slug: String) {
        if !self.prerequisites.contains(&slug) {
            self.prerequisites.push(slug);
        }
    }

    /// Whether this course lists `slug` as a prerequisite
    #[must_use]
    pub fn requires(&self, slug: &str) -> bool {
        self.prerequisites.iter().any(|p| p == slug)
    }

    /// First sentence of the description, for cards and listings
    #[must_use]
    pub fn summary(&self) -> &str {
        first_sentence(&self.description)
    }

    /// Units sorted by unit number; ties keep their stored order
    #[must_use]
    pub fn units_in_order(&self) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.iter().collect();
        units.sort_by_key(|unit| unit.number);
        units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        Course::new(
            "PRMT-201".to_string(),
            "prmt-201".to_string(),
            "Chain-of-Thought".to_string(),
            2,
            Difficulty::Intermediate,
        )
    }

    #[test]
    fn test_course_creation() {
        let course = sample();

        assert_eq!(course.code, "PRMT-201");
        assert_eq!(course.slug, "prmt-201");
        assert_eq!(course.semester, 2);
        assert!(course.prerequisites.is_empty());
        assert!(course.units.is_empty());
        assert!(course.recommended_reading.is_empty());
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = sample();

        course.add_prerequisite("prmt-101".to_string());
        assert_eq!(course.prerequisites, vec!["prmt-101"]);

        // Adding duplicate should not duplicate
        course.add_prerequisite("prmt-101".to_string());
        assert_eq!(course.prerequisites.len(), 1);
        assert!(course.requires("prmt-101"));
        assert!(!course.requires("prmt-102"));
    }

    #[test]
    fn test_summary_is_first_sentence() {
        let mut course = sample();
        course.description = "Think step by step. Then answer.".to_string();
        assert_eq!(course.summary(), "Think step by step.");
    }

    #[test]
    fn test_units_in_order() {
        let mut course = sample();
        course.units.push(Unit::new(2, "Second".to_string()));
        course.units.push(Unit::new(1, "First".to_string()));
        course.units.push(Unit::new(2, "Also second".to_string()));

        let titles: Vec<&str> = course
            .units_in_order()
            .iter()
            .map(|u| u.title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Also second"]);
    }
}
