//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! The dialogue service is generic over bank/log/messenger traits, but AppState
//! pins it to the filesystem implementations and the outbox messenger.

use std::path::PathBuf;
use std::sync::Arc;

use questa_core::dialogue::service::DialogueService;
use questa_infra::bank::JsonBankLoader;
use questa_infra::config::{load_global_config, resolve_data_dir};
use questa_infra::record::JsonlAnswerLog;
use questa_types::config::GlobalConfig;

use crate::outbox::OutboxMessenger;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteDialogueService = DialogueService<JsonBankLoader, JsonlAnswerLog, OutboxMessenger>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub dialogue_service: Arc<ConcreteDialogueService>,
    /// Direct bank access for catalog reads (the dialogue service owns its
    /// own loader internally).
    pub bank: Arc<JsonBankLoader>,
    pub outbox: OutboxMessenger,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let outbox = OutboxMessenger::new();
        let dialogue_service = DialogueService::new(
            JsonBankLoader::new(&data_dir, &config),
            JsonlAnswerLog::new(&data_dir, &config.answers_dir),
            outbox.clone(),
        );

        // A separate loader for catalog reads outside the dialogue flow.
        let bank = JsonBankLoader::new(&data_dir, &config);

        Ok(Self {
            dialogue_service: Arc::new(dialogue_service),
            bank: Arc::new(bank),
            outbox,
            config,
            data_dir,
        })
    }
}
