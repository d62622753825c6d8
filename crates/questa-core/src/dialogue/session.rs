//! Per-conversation dialogue session state.
//!
//! A `DialogueSession` bundles everything one conversation carries between
//! events: its step, its cursor, and the prompt it is expected to answer.
//! The service keeps each session behind its own async mutex so events for
//! one conversation are processed strictly one at a time.

use chrono::{DateTime, Utc};
use questa_types::dialogue::{ConversationId, DialogueSnapshot, DialogueStep};
use uuid::Uuid;

use crate::traversal::Cursor;

/// State of one conversation between events.
#[derive(Debug)]
pub struct DialogueSession {
    pub id: ConversationId,
    pub step: DialogueStep,
    pub cursor: Cursor,
    /// Prompt id the conversation should answer next.
    ///
    /// Overwritten on every new prompt and cleared on completion, so stale
    /// prompt ids can always be told apart from the live one. `None` also
    /// covers the window after a failed prompt delivery: no answer can match
    /// then, which forces a re-send of the unseen question.
    pub pending_prompt: Option<Uuid>,
    pub started_at: DateTime<Utc>,
}

impl DialogueSession {
    /// Fresh session in the `Idle` step.
    pub fn new(id: ConversationId) -> Self {
        Self {
            id,
            step: DialogueStep::default(),
            cursor: Cursor::new(),
            pending_prompt: None,
            started_at: Utc::now(),
        }
    }

    /// Read-only view for status queries.
    pub fn snapshot(&self) -> DialogueSnapshot {
        DialogueSnapshot {
            conversation_id: self.id.clone(),
            step: self.step,
            category: self.cursor.category_name().map(str::to_string),
            position: self.cursor.position(),
            answered: self.cursor.answered(),
            total_questions: self.cursor.total_questions(),
            started_at: self.started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questa_types::bank::{AnswerOption, Category, Question, Scale};

    fn one_question_category() -> Category {
        Category {
            name: "hpi".to_string(),
            scales: vec![Scale {
                title: "Adjustment".to_string(),
                questions: vec![Question {
                    text: "I stay calm under pressure".to_string(),
                    options: vec![AnswerOption {
                        id: "yes".to_string(),
                        text: "Yes".to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = DialogueSession::new(ConversationId::new("chat-1"));
        assert_eq!(session.step, DialogueStep::Idle);
        assert!(session.pending_prompt.is_none());
        assert!(session.cursor.category().is_none());
    }

    #[test]
    fn test_snapshot_reflects_cursor() {
        let mut session = DialogueSession::new(ConversationId::new("chat-1"));
        session.cursor.reset(one_question_category());
        session.step = DialogueStep::InQuestion;

        let snapshot = session.snapshot();

        assert_eq!(snapshot.step, DialogueStep::InQuestion);
        assert_eq!(snapshot.category.as_deref(), Some("hpi"));
        assert_eq!(snapshot.answered, 0);
        assert_eq!(snapshot.total_questions, 1);
        assert!(snapshot.position.is_some());
    }

    #[test]
    fn test_snapshot_without_category_has_no_position() {
        let session = DialogueSession::new(ConversationId::new("chat-2"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.category, None);
        assert_eq!(snapshot.position, None);
        assert_eq!(snapshot.total_questions, 0);
    }
}
