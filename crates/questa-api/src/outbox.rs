//! Outbox messenger buffering outbound messages per conversation.
//!
//! The dialogue service pushes prompts, notices, and menus through the
//! `Messenger` port while it handles an event. Request/response transports
//! (the REST API, the terminal runner) cannot push to the user; instead they
//! drain this buffer right after feeding an event and deliver the batch
//! themselves.

use std::sync::Arc;

use dashmap::DashMap;
use questa_core::outbound::Messenger;
use questa_types::bank::CategorySummary;
use questa_types::dialogue::ConversationId;
use questa_types::error::DeliveryError;
use questa_types::event::{OutboundMessage, PromptHandle, QuestionPrompt};
use uuid::Uuid;

/// Messenger that queues messages for later pickup instead of delivering.
#[derive(Clone, Default)]
pub struct OutboxMessenger {
    queues: Arc<DashMap<ConversationId, Vec<OutboundMessage>>>,
}

impl OutboxMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything queued for a conversation, in send order.
    pub fn drain(&self, conversation_id: &ConversationId) -> Vec<OutboundMessage> {
        self.queues
            .remove(conversation_id)
            .map(|(_, messages)| messages)
            .unwrap_or_default()
    }

    fn push(&self, conversation_id: &ConversationId, message: OutboundMessage) {
        self.queues
            .entry(conversation_id.clone())
            .or_default()
            .push(message);
    }
}

impl Messenger for OutboxMessenger {
    async fn send_prompt(
        &self,
        conversation_id: &ConversationId,
        prompt: QuestionPrompt,
    ) -> Result<PromptHandle, DeliveryError> {
        let handle = PromptHandle {
            prompt_id: Uuid::now_v7(),
        };
        self.push(
            conversation_id,
            OutboundMessage::Prompt {
                prompt_id: handle.prompt_id,
                text: prompt.text,
                options: prompt.options,
            },
        );
        Ok(handle)
    }

    async fn send_notice(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Result<(), DeliveryError> {
        self.push(
            conversation_id,
            OutboundMessage::Notice {
                text: text.to_string(),
            },
        );
        Ok(())
    }

    async fn send_menu(
        &self,
        conversation_id: &ConversationId,
        text: &str,
        categories: &[CategorySummary],
    ) -> Result<(), DeliveryError> {
        self.push(
            conversation_id,
            OutboundMessage::Menu {
                text: text.to_string(),
                categories: categories.to_vec(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(n: u32) -> ConversationId {
        ConversationId::new(format!("chat-{n}"))
    }

    #[tokio::test]
    async fn test_drain_returns_messages_in_send_order() {
        let outbox = OutboxMessenger::new();
        let id = chat(1);

        outbox.send_notice(&id, "hello").await.unwrap();
        outbox.send_menu(&id, "pick", &[]).await.unwrap();
        outbox
            .send_prompt(
                &id,
                QuestionPrompt {
                    text: "q0".to_string(),
                    options: vec![],
                },
            )
            .await
            .unwrap();

        let drained = outbox.drain(&id);
        assert_eq!(drained.len(), 3);
        assert!(matches!(drained[0], OutboundMessage::Notice { .. }));
        assert!(matches!(drained[1], OutboundMessage::Menu { .. }));
        assert!(matches!(drained[2], OutboundMessage::Prompt { .. }));

        // A drain empties the queue.
        assert!(outbox.drain(&id).is_empty());
    }

    #[tokio::test]
    async fn test_queues_are_per_conversation() {
        let outbox = OutboxMessenger::new();

        outbox.send_notice(&chat(1), "for one").await.unwrap();
        outbox.send_notice(&chat(2), "for two").await.unwrap();

        assert_eq!(outbox.drain(&chat(1)).len(), 1);
        assert_eq!(outbox.drain(&chat(2)).len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_handle_matches_queued_message() {
        let outbox = OutboxMessenger::new();
        let id = chat(1);

        let first = outbox
            .send_prompt(
                &id,
                QuestionPrompt {
                    text: "q0".to_string(),
                    options: vec![],
                },
            )
            .await
            .unwrap();
        let second = outbox
            .send_prompt(
                &id,
                QuestionPrompt {
                    text: "q1".to_string(),
                    options: vec![],
                },
            )
            .await
            .unwrap();

        assert_ne!(first.prompt_id, second.prompt_id);
        let drained = outbox.drain(&id);
        match &drained[0] {
            OutboundMessage::Prompt { prompt_id, .. } => assert_eq!(*prompt_id, first.prompt_id),
            other => panic!("expected Prompt, got {other:?}"),
        }
        match &drained[1] {
            OutboundMessage::Prompt { prompt_id, .. } => assert_eq!(*prompt_id, second.prompt_id),
            other => panic!("expected Prompt, got {other:?}"),
        }
    }
}
