//! Conversation event and outbound message types for Questa.
//!
//! `ConversationEvent` is the inbound side: everything a transport can tell
//! the dialogue service. `OutboundMessage` is the outbound side: everything
//! the service can ask a messenger to deliver. Both are serde-tagged enums
//! so transports can move them over the wire unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bank::{AnswerOption, CategorySummary};
use crate::dialogue::ConversationId;

/// Inbound events a transport feeds into the dialogue service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// The user started (or restarted) a session.
    SessionStarted { conversation_id: ConversationId },

    /// The user picked a category from the menu.
    CategorySelected {
        conversation_id: ConversationId,
        category_id: String,
    },

    /// The user answered a pending question prompt.
    AnswerChosen {
        conversation_id: ConversationId,
        /// Handle of the prompt being answered, as issued by the messenger.
        prompt_id: Uuid,
        option_id: String,
    },

    /// The user asked for the category menu.
    BackToMenu { conversation_id: ConversationId },
}

impl ConversationEvent {
    /// The conversation this event belongs to.
    pub fn conversation_id(&self) -> &ConversationId {
        match self {
            ConversationEvent::SessionStarted { conversation_id }
            | ConversationEvent::CategorySelected {
                conversation_id, ..
            }
            | ConversationEvent::AnswerChosen {
                conversation_id, ..
            }
            | ConversationEvent::BackToMenu { conversation_id } => conversation_id,
        }
    }
}

/// A question prompt ready for delivery: text plus its ordered options.
///
/// Option order is part of the contract; messengers must present options in
/// exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Receipt for a delivered prompt.
///
/// The messenger generates `prompt_id`; answers quote it so the service can
/// tell a live answer from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptHandle {
    pub prompt_id: Uuid,
}

/// Outbound messages the dialogue service hands to a messenger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// A question prompt with its answer options.
    Prompt {
        prompt_id: Uuid,
        text: String,
        options: Vec<AnswerOption>,
    },

    /// A plain informational notice.
    Notice { text: String },

    /// The category menu.
    Menu {
        text: String,
        categories: Vec<CategorySummary>,
    },
}
