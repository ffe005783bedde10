//! Course data model
//!
//! Courses are plain immutable records loaded once from a JSON document.
//! Difficulty labels form a closed set; the category filter adds an `All`
//! wildcard on top of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseCategoryError;

/// Image shown when a course has no image of its own
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Enrollment caption shown on every card
pub const STUDENTS_CAPTION: &str = "1.2k students";

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// All levels in display order
    pub const ALL: [Difficulty; 4] =
        [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced, Difficulty::Expert];

    /// The label as stored in the catalog
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier within the catalog
    pub id: u32,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Image path; empty means "use the placeholder"
    #[serde(default)]
    pub image: String,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Free-form duration ("4 weeks")
    pub duration: String,
    /// Whether the learner is enrolled
    #[serde(default)]
    pub enrolled: bool,
    /// Completion percentage, not clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
}

impl Course {
    /// Image path to render, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() { PLACEHOLDER_IMAGE } else { &self.image }
    }

    /// Progress to display, if any.
    ///
    /// Only enrolled courses with a recorded value show progress. Zero is a
    /// real value; out-of-range values pass through unchanged.
    pub fn visible_progress(&self) -> Option<i32> {
        if self.enrolled { self.progress } else { None }
    }

    /// Label for the card's call-to-action button
    pub fn call_to_action(&self) -> &'static str {
        if self.enrolled { "Continue" } else { "Start Learning" }
    }
}

/// Difficulty category used by the filter control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Category {
    /// Every category, in the order the filter control lists them
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Beginner,
        Category::Intermediate,
        Category::Advanced,
        Category::Expert,
    ];

    /// The difficulty this category narrows to, `None` for the wildcard
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Category::All => None,
            Category::Beginner => Some(Difficulty::Beginner),
            Category::Intermediate => Some(Difficulty::Intermediate),
            Category::Advanced => Some(Difficulty::Advanced),
            Category::Expert => Some(Difficulty::Expert),
        }
    }

    /// Exact category match
    pub fn matches(self, difficulty: Difficulty) -> bool {
        self.difficulty().is_none_or(|d| d == difficulty)
    }

    /// Position in [`Category::ALL`]
    pub fn index(self) -> usize {
        match self {
            Category::All => 0,
            Category::Beginner => 1,
            Category::Intermediate => 2,
            Category::Advanced => 3,
            Category::Expert => 4,
        }
    }

    pub fn label(self) -> &'static str {
        self.difficulty().map_or("All", Difficulty::label)
    }
}

impl From<Difficulty> for Category {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => Category::Beginner,
            Difficulty::Intermediate => Category::Intermediate,
            Difficulty::Advanced => Category::Advanced,
            Difficulty::Expert => Category::Expert,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parse user-typed text, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(wanted.to_string()))
    }
}
