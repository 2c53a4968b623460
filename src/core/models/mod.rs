//! Data models for `PromptSchool`

pub mod course;
pub mod difficulty;
pub mod semester;
pub mod unit;

pub use course::{Course, ReadingLink};
pub use difficulty::Difficulty;
pub use semester::Semester;
pub use unit::{ExamplePrompt, Unit};
