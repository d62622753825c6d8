//! Outbound messaging port.
//!
//! Everything the dialogue service says to a user flows through this trait.
//! Poll-style and keyboard-style chat presentations collapse behind it; the
//! state machine is identical whichever rendering a messenger picks.

use questa_types::bank::CategorySummary;
use questa_types::dialogue::ConversationId;
use questa_types::error::DeliveryError;
use questa_types::event::{PromptHandle, QuestionPrompt};

/// Outbound channel for one chat surface.
///
/// Implementations: `OutboxMessenger` in questa-api, in-memory fakes in
/// tests.
pub trait Messenger: Send + Sync {
    /// Deliver a question prompt.
    ///
    /// The messenger mints the prompt id in the returned handle; answers
    /// quote that id. Options must be presented in the given order.
    fn send_prompt(
        &self,
        conversation_id: &ConversationId,
        prompt: QuestionPrompt,
    ) -> impl std::future::Future<Output = Result<PromptHandle, DeliveryError>> + Send;

    /// Deliver a plain informational notice.
    fn send_notice(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;

    /// Present the category menu.
    ///
    /// Menu picks come back as `CategorySelected` events, never as answers,
    /// so the menu is a distinct message kind rather than a question prompt.
    fn send_menu(
        &self,
        conversation_id: &ConversationId,
        text: &str,
        categories: &[CategorySummary],
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}
