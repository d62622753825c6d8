//! Interactive terminal quiz runner.
//!
//! Drives the dialogue service exactly the way a remote transport would:
//! feed one event, drain the outbox, render the reply batch, ask for the
//! next input. The service never knows it is talking to a terminal.

use anyhow::Result;
use console::style;
use dialoguer::Select;
use uuid::Uuid;

use questa_types::bank::{AnswerOption, CategorySummary};
use questa_types::dialogue::{ConversationId, DialogueStep};
use questa_types::event::{ConversationEvent, OutboundMessage};

use crate::state::AppState;

/// Input request carried out of the drained reply batch.
enum PendingInput {
    Menu {
        text: String,
        categories: Vec<CategorySummary>,
    },
    Question {
        prompt_id: Uuid,
        text: String,
        options: Vec<AnswerOption>,
    },
    None,
}

/// Take a quiz in the terminal.
pub async fn run_quiz(state: &AppState, category: Option<&str>) -> Result<()> {
    let conversation_id = ConversationId(format!("terminal-{}", Uuid::now_v7()));
    let mut preselected = category.map(str::to_string);

    let mut event = Some(ConversationEvent::SessionStarted {
        conversation_id: conversation_id.clone(),
    });

    while let Some(current) = event.take() {
        state.dialogue_service.handle_event(current).await?;

        // Notices render immediately; the last menu or prompt in the batch
        // becomes the input request.
        let mut pending = PendingInput::None;
        for message in state.outbox.drain(&conversation_id) {
            match message {
                OutboundMessage::Notice { text } => {
                    println!();
                    println!("  {text}");
                }
                OutboundMessage::Menu { text, categories } => {
                    pending = PendingInput::Menu { text, categories };
                }
                OutboundMessage::Prompt {
                    prompt_id,
                    text,
                    options,
                } => {
                    pending = PendingInput::Question {
                        prompt_id,
                        text,
                        options,
                    };
                }
            }
        }

        event = match pending {
            PendingInput::Menu { text, categories } => {
                if let Some(category_id) = preselected.take() {
                    Some(ConversationEvent::CategorySelected {
                        conversation_id: conversation_id.clone(),
                        category_id,
                    })
                } else {
                    let mut items: Vec<String> =
                        categories.iter().map(|c| c.label.clone()).collect();
                    items.push("Quit".to_string());

                    println!("\n{}", style(&text).bold());
                    let choice = Select::new().items(&items).default(0).interact()?;

                    if choice == categories.len() {
                        None
                    } else {
                        Some(ConversationEvent::CategorySelected {
                            conversation_id: conversation_id.clone(),
                            category_id: categories[choice].id.clone(),
                        })
                    }
                }
            }

            PendingInput::Question {
                prompt_id,
                text,
                options,
            } => {
                if let Some(snapshot) = state.dialogue_service.snapshot(&conversation_id).await {
                    if snapshot.total_questions > 0 {
                        println!();
                        println!(
                            "  {}",
                            style(format!(
                                "Question {} of {}",
                                snapshot.answered + 1,
                                snapshot.total_questions
                            ))
                            .dim()
                        );
                    }
                }

                println!("\n{}", style(&text).bold());
                let items: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
                let choice = Select::new().items(&items).default(0).interact()?;

                Some(ConversationEvent::AnswerChosen {
                    conversation_id: conversation_id.clone(),
                    prompt_id,
                    option_id: options[choice].id.clone(),
                })
            }

            // No input requested: after a completion notice the runner asks
            // for the menu itself; anything else ends the session.
            PendingInput::None => match state.dialogue_service.snapshot(&conversation_id).await {
                Some(snapshot) if snapshot.step == DialogueStep::CategoryComplete => {
                    Some(ConversationEvent::BackToMenu {
                        conversation_id: conversation_id.clone(),
                    })
                }
                _ => None,
            },
        };
    }

    state.dialogue_service.end(&conversation_id);

    println!();
    println!("  {}", style("Session ended.").dim());
    println!();

    Ok(())
}
