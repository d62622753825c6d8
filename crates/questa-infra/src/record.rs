//! Append-only answer logs.
//!
//! One JSONL file per category under `{data_dir}/{answers_dir}`. Each line is
//! a serialized [`AnswerRecord`]; the file is only ever appended to, never
//! rewritten, so earlier runs survive restarts and crashes mid-category.

use std::path::{Path, PathBuf};

use questa_core::record::AnswerLog;
use questa_types::error::RecordError;
use questa_types::record::AnswerRecord;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Filesystem-backed answer log.
pub struct JsonlAnswerLog {
    answers_dir: PathBuf,
}

impl JsonlAnswerLog {
    /// Create a log rooted at `{data_dir}/{answers_dir}`.
    pub fn new(data_dir: &Path, answers_dir: &str) -> Self {
        Self {
            answers_dir: data_dir.join(answers_dir),
        }
    }

    /// Path of the log file for a category.
    pub fn log_path(&self, category_name: &str) -> PathBuf {
        self.answers_dir.join(format!("{category_name}.jsonl"))
    }
}

impl AnswerLog for JsonlAnswerLog {
    async fn record(
        &self,
        category_name: &str,
        record: &AnswerRecord,
    ) -> Result<(), RecordError> {
        let mut line =
            serde_json::to_string(record).map_err(|err| RecordError::Encode(err.to_string()))?;
        line.push('\n');

        let append = |err: std::io::Error| RecordError::Append {
            log: category_name.to_string(),
            reason: err.to_string(),
        };
        tokio::fs::create_dir_all(&self.answers_dir)
            .await
            .map_err(append)?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path(category_name))
            .await
            .map_err(append)?;
        file.write_all(line.as_bytes()).await.map_err(append)?;
        file.flush().await.map_err(append)?;

        info!(
            category = %category_name,
            scale = %record.scale_title,
            option = %record.selected_option_label,
            "Recorded answer"
        );
        Ok(())
    }
}
