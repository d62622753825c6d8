//! Question bank types for Questa.
//!
//! A bank is a category of questionnaire content: an ordered list of scales,
//! each an ordered list of questions, each with a fixed set of answer
//! options. Banks are loaded once per category selection and never mutated
//! afterwards; `PartialEq` exists so callers can verify that re-loading an
//! unchanged document yields a structurally equal category.

use serde::{Deserialize, Serialize};

/// One selectable answer for a question.
///
/// `id` is stable and unique within its question; `text` is the display
/// label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

/// A single question with its ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Resolve an option id against this question's options.
    ///
    /// Returns `None` for ids that do not belong to this question (stale or
    /// fabricated answers).
    pub fn option_by_id(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A named sub-section of a category: an ordered run of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub title: String,
    pub questions: Vec<Question>,
}

/// A full questionnaire category: ordered scales of ordered questions.
///
/// `name` is the catalog id (e.g. `hpi`), not the raw document key the bank
/// file uses internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub scales: Vec<Scale>,
}

impl Category {
    /// Total number of questions across all scales.
    pub fn total_questions(&self) -> usize {
        self.scales.iter().map(|s| s.questions.len()).sum()
    }
}

/// A catalog entry as presented in the category menu.
///
/// Carries just enough to render a choice; the full bank is only loaded once
/// the user selects the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
}
