//! Dialogue orchestration: the conversation state machine.
//!
//! `DialogueService` owns every active session and reacts to inbound
//! `ConversationEvent`s: loading banks, walking cursors, recording answers,
//! and emitting prompts through the messenger. Bank, recorder, and traversal
//! failures are converted here into user-visible notices or log lines; only
//! delivery failures reach the caller, because a dead channel is the
//! transport's problem to solve.

use std::sync::Arc;

use dashmap::DashMap;
use questa_types::bank::CategorySummary;
use questa_types::dialogue::{ConversationId, DialogueSnapshot, DialogueStep};
use questa_types::error::{BankError, DeliveryError};
use questa_types::event::{ConversationEvent, QuestionPrompt};
use questa_types::record::AnswerRecord;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::bank::QuestionBank;
use crate::dialogue::session::DialogueSession;
use crate::outbound::Messenger;
use crate::record::AnswerLog;

/// Greeting sent when a session starts.
const GREETING: &str =
    "Welcome! This bot walks you through a questionnaire, one question at a time.";
/// Caption above the category menu.
const MENU_PROMPT: &str = "Choose a section to begin:";
/// Notice for category picks outside the catalog.
const UNKNOWN_CATEGORY_NOTICE: &str =
    "That section is not on the menu. Please pick one of the listed sections.";
/// Notice when a bank cannot be loaded or the catalog cannot be listed.
const CATEGORY_UNAVAILABLE_NOTICE: &str =
    "That section is unavailable right now. Please try again later.";
/// Notice preceding a re-sent prompt after a stale or unmatched answer.
const RETRY_NOTICE: &str =
    "That answer could not be matched to the current question. Here it is again:";
/// Notice when a category has been fully answered.
const COMPLETION_NOTICE: &str =
    "You have completed this section. Thank you! Ask for the menu to pick another.";

/// What handling one event amounted to.
///
/// Lets transports and tests react without reaching into session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The category menu went out; the session sits at the menu.
    MenuShown,
    /// A fresh question prompt went out.
    QuestionShown { prompt_id: Uuid },
    /// The current question went out again after a stale or unmatched answer.
    Reprompted { prompt_id: Uuid },
    /// A selection failed; a notice and a fresh menu went out.
    StayedAtMenu,
    /// The category was exhausted; the completion notice went out.
    CategoryCompleted,
    /// The event was not valid in the current step and was dropped.
    Ignored,
}

/// Orchestrates the dialogue lifecycle for all conversations.
///
/// Generic over its ports to maintain clean layering (questa-core never
/// depends on questa-infra). Sessions live in a concurrent map; each entry
/// carries its own async mutex, so events for one conversation are handled
/// strictly one at a time while distinct conversations proceed in parallel.
pub struct DialogueService<B: QuestionBank, L: AnswerLog, M: Messenger> {
    bank: B,
    log: L,
    messenger: M,
    sessions: DashMap<ConversationId, Arc<Mutex<DialogueSession>>>,
}

impl<B: QuestionBank, L: AnswerLog, M: Messenger> DialogueService<B, L, M> {
    /// Create a new dialogue service over the given ports.
    pub fn new(bank: B, log: L, messenger: M) -> Self {
        Self {
            bank,
            log,
            messenger,
            sessions: DashMap::new(),
        }
    }

    // --- Event handling ---

    /// Handle one inbound event to completion.
    ///
    /// Returns what happened; the only error is a failed outbound delivery.
    pub async fn handle_event(&self, event: ConversationEvent) -> Result<Outcome, DeliveryError> {
        match event {
            ConversationEvent::SessionStarted { conversation_id } => {
                self.handle_session_started(conversation_id).await
            }
            ConversationEvent::CategorySelected {
                conversation_id,
                category_id,
            } => {
                self.handle_category_selected(conversation_id, category_id)
                    .await
            }
            ConversationEvent::AnswerChosen {
                conversation_id,
                prompt_id,
                option_id,
            } => {
                self.handle_answer_chosen(conversation_id, prompt_id, option_id)
                    .await
            }
            ConversationEvent::BackToMenu { conversation_id } => {
                self.handle_back_to_menu(conversation_id).await
            }
        }
    }

    async fn handle_session_started(
        &self,
        id: ConversationId,
    ) -> Result<Outcome, DeliveryError> {
        // A restart replaces any live session wholesale; in-flight work on
        // the old session finishes against an orphaned entry and is dropped.
        let session = Arc::new(Mutex::new(DialogueSession::new(id.clone())));
        let mut guard = session.lock().await;
        self.sessions.insert(id.clone(), Arc::clone(&session));

        info!(conversation = %id, "Session started");
        self.messenger.send_notice(&id, GREETING).await?;
        self.show_menu(&mut guard).await
    }

    async fn handle_category_selected(
        &self,
        id: ConversationId,
        category_id: String,
    ) -> Result<Outcome, DeliveryError> {
        let Some(session) = self.session(&id) else {
            debug!(conversation = %id, "Category selected without a session; ignoring");
            return Ok(Outcome::Ignored);
        };
        let mut guard = session.lock().await;

        if guard.step != DialogueStep::CategoryMenu {
            debug!(
                conversation = %id,
                step = %guard.step,
                "Category selection outside the menu; ignoring"
            );
            return Ok(Outcome::Ignored);
        }

        let category = match self.bank.load(&category_id).await {
            Ok(category) => category,
            Err(BankError::NotFound(_)) => {
                warn!(conversation = %id, category = %category_id, "Unknown category selected");
                self.messenger
                    .send_notice(&id, UNKNOWN_CATEGORY_NOTICE)
                    .await?;
                // Re-present the menu so the reply is self-contained.
                self.show_menu(&mut guard).await?;
                return Ok(Outcome::StayedAtMenu);
            }
            Err(err @ BankError::Malformed { .. }) => {
                error!(conversation = %id, category = %category_id, error = %err, "Bank failed to load");
                self.messenger
                    .send_notice(&id, CATEGORY_UNAVAILABLE_NOTICE)
                    .await?;
                self.show_menu(&mut guard).await?;
                return Ok(Outcome::StayedAtMenu);
            }
        };

        info!(
            conversation = %id,
            category = %category.name,
            scales = category.scales.len(),
            questions = category.total_questions(),
            "Category selected"
        );
        guard.cursor.reset(category);
        guard.step = DialogueStep::InQuestion;
        self.send_current_question(&mut guard, false).await
    }

    async fn handle_answer_chosen(
        &self,
        id: ConversationId,
        prompt_id: Uuid,
        option_id: String,
    ) -> Result<Outcome, DeliveryError> {
        let Some(session) = self.session(&id) else {
            debug!(conversation = %id, "Answer without a session; ignoring");
            return Ok(Outcome::Ignored);
        };
        let mut guard = session.lock().await;

        if guard.step != DialogueStep::InQuestion {
            debug!(
                conversation = %id,
                step = %guard.step,
                "Answer outside a question; ignoring"
            );
            return Ok(Outcome::Ignored);
        }

        if guard.pending_prompt != Some(prompt_id) {
            warn!(
                conversation = %id,
                prompt = %prompt_id,
                "Answer for a superseded prompt; re-sending the current question"
            );
            self.messenger.send_notice(&id, RETRY_NOTICE).await?;
            return self.send_current_question(&mut guard, true).await;
        }

        let question = match guard.cursor.current_question() {
            Ok(question) => question.clone(),
            Err(err) => {
                error!(conversation = %id, error = %err, "No current question while answering; returning to menu");
                self.messenger
                    .send_notice(&id, CATEGORY_UNAVAILABLE_NOTICE)
                    .await?;
                return self.show_menu(&mut guard).await;
            }
        };

        let Some(option) = question.option_by_id(&option_id) else {
            warn!(
                conversation = %id,
                option = %option_id,
                "Answer option not on the current question; re-sending"
            );
            self.messenger.send_notice(&id, RETRY_NOTICE).await?;
            return self.send_current_question(&mut guard, true).await;
        };

        let category_name = guard
            .cursor
            .category_name()
            .map(str::to_string)
            .unwrap_or_default();
        let scale_title = guard
            .cursor
            .current_scale()
            .map(|scale| scale.title.clone())
            .unwrap_or_default();
        let record = AnswerRecord::new(scale_title, question.text.clone(), option.text.clone());

        // Recording is best-effort: a dropped record never blocks the
        // conversation.
        if let Err(err) = self.log.record(&category_name, &record).await {
            warn!(
                conversation = %id,
                category = %category_name,
                error = %err,
                "Failed to record answer; continuing"
            );
        }

        guard.pending_prompt = None;
        if guard.cursor.advance() {
            self.send_current_question(&mut guard, false).await
        } else {
            guard.step = DialogueStep::CategoryComplete;
            info!(
                conversation = %id,
                category = %category_name,
                answered = guard.cursor.answered(),
                "Category complete"
            );
            self.messenger.send_notice(&id, COMPLETION_NOTICE).await?;
            Ok(Outcome::CategoryCompleted)
        }
    }

    async fn handle_back_to_menu(&self, id: ConversationId) -> Result<Outcome, DeliveryError> {
        let Some(session) = self.session(&id) else {
            debug!(conversation = %id, "Menu request without a session; ignoring");
            return Ok(Outcome::Ignored);
        };
        let mut guard = session.lock().await;

        match guard.step {
            DialogueStep::InQuestion | DialogueStep::CategoryComplete => {
                info!(conversation = %id, "Returning to menu");
                self.show_menu(&mut guard).await
            }
            step => {
                debug!(conversation = %id, step = %step, "Menu request outside a traversal; ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }

    // --- Emission helpers ---

    /// Park the session at the menu and present the catalog.
    ///
    /// The step changes before anything is sent: a failed menu delivery
    /// leaves the session re-entrant at the menu rather than stranded.
    async fn show_menu(&self, session: &mut DialogueSession) -> Result<Outcome, DeliveryError> {
        session.cursor.clear();
        session.pending_prompt = None;
        session.step = DialogueStep::CategoryMenu;

        match self.bank.categories().await {
            Ok(categories) => {
                self.messenger
                    .send_menu(&session.id, MENU_PROMPT, &categories)
                    .await?;
                Ok(Outcome::MenuShown)
            }
            Err(err) => {
                error!(conversation = %session.id, error = %err, "Failed to list categories");
                self.messenger
                    .send_notice(&session.id, CATEGORY_UNAVAILABLE_NOTICE)
                    .await?;
                Ok(Outcome::StayedAtMenu)
            }
        }
    }

    /// Emit the question the cursor is parked on.
    ///
    /// The pending prompt is cleared before the send and only set from the
    /// new handle afterwards, so a delivery failure leaves no live prompt:
    /// the cursor never moves past a question the user has not seen, and the
    /// next answer event (which cannot match) re-sends it.
    async fn send_current_question(
        &self,
        session: &mut DialogueSession,
        reprompt: bool,
    ) -> Result<Outcome, DeliveryError> {
        let question = match session.cursor.current_question() {
            Ok(question) => question.clone(),
            Err(err) => {
                error!(conversation = %session.id, error = %err, "No current question to send; returning to menu");
                self.messenger
                    .send_notice(&session.id, CATEGORY_UNAVAILABLE_NOTICE)
                    .await?;
                return self.show_menu(session).await;
            }
        };
        let scale_title = session
            .cursor
            .current_scale()
            .map(|scale| scale.title.clone())
            .unwrap_or_default();

        session.pending_prompt = None;
        info!(
            conversation = %session.id,
            scale = %scale_title,
            question = %question.text,
            options = question.options.len(),
            "Presenting question"
        );

        let prompt = QuestionPrompt {
            text: question.text,
            options: question.options,
        };
        let handle = self.messenger.send_prompt(&session.id, prompt).await?;
        session.pending_prompt = Some(handle.prompt_id);

        if reprompt {
            Ok(Outcome::Reprompted {
                prompt_id: handle.prompt_id,
            })
        } else {
            Ok(Outcome::QuestionShown {
                prompt_id: handle.prompt_id,
            })
        }
    }

    // --- Queries ---

    /// Snapshot one conversation's state, if it has a session.
    pub async fn snapshot(&self, id: &ConversationId) -> Option<DialogueSnapshot> {
        let session = self.session(id)?;
        let guard = session.lock().await;
        Some(guard.snapshot())
    }

    /// Drop a conversation's session. Returns whether one existed.
    pub fn end(&self, id: &ConversationId) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// The menu catalog, straight from the bank.
    pub async fn categories(&self) -> Result<Vec<CategorySummary>, BankError> {
        self.bank.categories().await
    }

    /// Clone out a session handle without holding the map open.
    fn session(&self, id: &ConversationId) -> Option<Arc<Mutex<DialogueSession>>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }
}
