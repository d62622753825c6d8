//! Dialogue state types for Questa.
//!
//! These types model where a conversation stands: its identifier, the step
//! of the dialogue state machine it is in, and a read-only snapshot used by
//! status queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identifier for one conversation, as assigned by the chat platform.
///
/// Opaque to this system: any non-empty platform id (numeric chat id,
/// username, UUID) works. Stored as the original string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Step of the dialogue state machine a conversation is currently in.
///
/// Valid transitions: `Idle -> CategoryMenu` (session start),
/// `CategoryMenu -> InQuestion` (category selected), `InQuestion ->
/// InQuestion` (answer), `InQuestion -> CategoryComplete` (bank exhausted),
/// and `InQuestion | CategoryComplete -> CategoryMenu` (back to menu or
/// restart). Anything else is ignored by the dialogue service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    Idle,
    CategoryMenu,
    InQuestion,
    CategoryComplete,
}

impl fmt::Display for DialogueStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogueStep::Idle => write!(f, "idle"),
            DialogueStep::CategoryMenu => write!(f, "category_menu"),
            DialogueStep::InQuestion => write!(f, "in_question"),
            DialogueStep::CategoryComplete => write!(f, "category_complete"),
        }
    }
}

impl FromStr for DialogueStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(DialogueStep::Idle),
            "category_menu" => Ok(DialogueStep::CategoryMenu),
            "in_question" => Ok(DialogueStep::InQuestion),
            "category_complete" => Ok(DialogueStep::CategoryComplete),
            other => Err(format!("invalid dialogue step: '{other}'")),
        }
    }
}

impl Default for DialogueStep {
    fn default() -> Self {
        DialogueStep::Idle
    }
}

/// Position of a cursor inside its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub scale_index: usize,
    pub question_index: usize,
}

/// Read-only view of one conversation's dialogue state.
///
/// Returned by status queries (CLI and HTTP); never used to drive the state
/// machine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueSnapshot {
    pub conversation_id: ConversationId,
    pub step: DialogueStep,
    /// Catalog id of the loaded category, if any.
    pub category: Option<String>,
    /// Cursor position, present only while a category is loaded.
    pub position: Option<CursorPosition>,
    /// Questions answered since the category was selected.
    pub answered: u32,
    /// Total questions in the loaded category (0 when none is loaded).
    pub total_questions: u32,
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_step_roundtrip() {
        for step in [
            DialogueStep::Idle,
            DialogueStep::CategoryMenu,
            DialogueStep::InQuestion,
            DialogueStep::CategoryComplete,
        ] {
            let s = step.to_string();
            let parsed: DialogueStep = s.parse().unwrap();
            assert_eq!(step, parsed);
        }
    }

    #[test]
    fn test_dialogue_step_serde() {
        let step = DialogueStep::InQuestion;
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, "\"in_question\"");
        let parsed: DialogueStep = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DialogueStep::InQuestion);
    }

    #[test]
    fn test_dialogue_step_default() {
        assert_eq!(DialogueStep::default(), DialogueStep::Idle);
    }

    #[test]
    fn test_dialogue_step_rejects_unknown() {
        assert!("finished".parse::<DialogueStep>().is_err());
    }

    #[test]
    fn test_conversation_id_serializes_as_plain_string() {
        let id = ConversationId::new("chat-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"chat-42\"");
        let parsed: ConversationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = DialogueSnapshot {
            conversation_id: ConversationId::new("chat-42"),
            step: DialogueStep::InQuestion,
            category: Some("hpi".to_string()),
            position: Some(CursorPosition {
                scale_index: 1,
                question_index: 0,
            }),
            answered: 3,
            total_questions: 12,
            started_at: Utc::now(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"step\":\"in_question\""));
        assert!(json.contains("\"scale_index\":1"));
    }
}
