//! Syllabus unit model

use serde::{Deserialize, Serialize};

/// An example prompt shown inside a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePrompt {
    /// Short label describing what the prompt demonstrates
    #[serde(default)]
    pub context: String,

    /// Prompt text, may span several lines
    pub prompt: String,
}

/// A unit of a course syllabus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Position within the course (display order, not globally unique)
    pub number: u32,

    /// Unit title
    pub title: String,

    /// Key concepts, in display order
    #[serde(default)]
    pub concepts: Vec<String>,

    /// Assignment description
    #[serde(default)]
    pub assignment: String,

    /// Example prompts, in display order
    #[serde(default)]
    pub example_prompts: Vec<ExamplePrompt>,
}

impl Unit {
    /// Create a unit with no concepts, prompts, or assignment
    #[must_use]
    pub const fn new(number: u32, title: String) -> Self {
        Self {
            number,
            title,
            concepts: Vec::new(),
            assignment: String::new(),
            example_prompts: Vec::new(),
        }
    }
}
