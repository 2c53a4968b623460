//! Semester model

use super::Difficulty;
use serde::{Deserialize, Serialize};

/// A semester of the curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Ordinal (1-based), referenced by `Course::semester`
    pub number: u8,

    /// Display name (e.g. "Foundations")
    pub name: String,

    /// Overall difficulty of the semester
    pub difficulty: Difficulty,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub const fn new(number: u8, name: String, difficulty: Difficulty) -> Self {
        Self {
            number,
            name,
            difficulty,
        }
    }

    /// Heading label, e.g. "Semester 1: Foundations"
    #[must_use]
    pub fn label(&self) -> String {
        format!("Semester {}: {}", self.number, self.name)
    }
}
