use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::QuestionId;

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Block a question belongs to within a battery.
///
/// Batteries are always laid out `General`, `Technical`, `Situational`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    General,
    Technical,
    Situational,
}

impl QuestionCategory {
    /// Badge label shown next to the prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::General => "General",
            QuestionCategory::Technical => "Technical",
            QuestionCategory::Situational => "Situational",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Labeled level attached to a question. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Basic => "Basic",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A rendered interview prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        category: QuestionCategory,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            difficulty,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
