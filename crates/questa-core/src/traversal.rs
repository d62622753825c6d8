//! Cursor over a loaded category: the question a conversation is on.
//!
//! The cursor owns its `Category` snapshot outright; nothing is shared
//! between conversations. At rest both indices point at a real question.
//! `advance` moves past the current question and reports whether another
//! one exists -- the `false` return is the only exhaustion signal, there is
//! no sentinel index value.

use questa_types::bank::{Category, Question, Scale};
use questa_types::dialogue::CursorPosition;
use questa_types::error::TraversalError;

/// Mutable per-conversation position within a category.
///
/// Expects a validated category (every scale has at least one question);
/// the bank loader enforces that before a category ever reaches a cursor.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    category: Option<Category>,
    scale_index: usize,
    question_index: usize,
}

impl Cursor {
    /// A cursor with no category loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a category snapshot and rewind to its first question.
    pub fn reset(&mut self, category: Category) {
        self.category = Some(category);
        self.scale_index = 0;
        self.question_index = 0;
    }

    /// Drop the loaded category (back to the menu).
    pub fn clear(&mut self) {
        self.category = None;
        self.scale_index = 0;
        self.question_index = 0;
    }

    /// The loaded category, if any.
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Name of the loaded category, if any.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// The scale the cursor is currently inside.
    pub fn current_scale(&self) -> Result<&Scale, TraversalError> {
        let category = self.category.as_ref().ok_or(TraversalError::NoCategory)?;
        category
            .scales
            .get(self.scale_index)
            .ok_or_else(|| TraversalError::Exhausted(category.name.clone()))
    }

    /// The question the conversation is waiting on.
    pub fn current_question(&self) -> Result<&Question, TraversalError> {
        let category = self.category.as_ref().ok_or(TraversalError::NoCategory)?;
        category
            .scales
            .get(self.scale_index)
            .and_then(|scale| scale.questions.get(self.question_index))
            .ok_or_else(|| TraversalError::Exhausted(category.name.clone()))
    }

    /// Move past the current question.
    ///
    /// Returns `true` while a next question exists. The call that moves past
    /// the final question returns `false` and parks the indices at the
    /// overflow boundary; further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        let Some(category) = self.category.as_ref() else {
            return false;
        };
        if self.scale_index >= category.scales.len() {
            return false;
        }
        self.question_index += 1;
        if self.question_index >= category.scales[self.scale_index].questions.len() {
            self.question_index = 0;
            self.scale_index += 1;
        }
        self.scale_index < category.scales.len()
    }

    /// Whether the loaded category has been fully traversed.
    pub fn is_exhausted(&self) -> bool {
        match &self.category {
            Some(category) => self.scale_index >= category.scales.len(),
            None => false,
        }
    }

    /// Current position, present while a category is loaded.
    pub fn position(&self) -> Option<CursorPosition> {
        self.category.as_ref().map(|_| CursorPosition {
            scale_index: self.scale_index,
            question_index: self.question_index,
        })
    }

    /// Questions already advanced past since the last reset.
    pub fn answered(&self) -> u32 {
        let Some(category) = self.category.as_ref() else {
            return 0;
        };
        let full_scales: usize = category
            .scales
            .iter()
            .take(self.scale_index)
            .map(|s| s.questions.len())
            .sum();
        (full_scales + self.question_index) as u32
    }

    /// Total questions in the loaded category (0 when none is loaded).
    pub fn total_questions(&self) -> u32 {
        self.category
            .as_ref()
            .map(|c| c.total_questions() as u32)
            .unwrap_or(0)
    }
}
