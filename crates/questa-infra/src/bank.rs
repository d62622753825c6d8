//! JSON bank loading.
//!
//! One JSON document per category. The catalog names the top-level key that
//! holds the scale list:
//!
//! ```json
//! {
//!   "categories_hpi": [
//!     {
//!       "title": "Adjustment",
//!       "questions": [
//!         { "text": "...", "options": [ { "id": "a", "text": "Agree" } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use questa_core::bank::QuestionBank;
use questa_types::bank::{Category, CategorySummary, Scale};
use questa_types::config::{CatalogEntry, GlobalConfig};
use questa_types::error::BankError;
use tracing::debug;

/// Filesystem-backed bank loader.
///
/// Resolves category ids through the configured catalog and reads bank
/// documents with `tokio::fs`. Loading is a pure function of the file's
/// contents: re-loading an unchanged document yields an equal `Category`.
pub struct JsonBankLoader {
    banks_dir: PathBuf,
    catalog: Vec<CatalogEntry>,
}

impl JsonBankLoader {
    /// Create a loader rooted at `{data_dir}/{config.banks_dir}`.
    pub fn new(data_dir: &Path, config: &GlobalConfig) -> Self {
        Self {
            banks_dir: data_dir.join(&config.banks_dir),
            catalog: config.catalog.clone(),
        }
    }

    /// Path of the bank document for a catalog entry.
    pub fn bank_path(&self, entry: &CatalogEntry) -> PathBuf {
        self.banks_dir.join(&entry.file)
    }

    fn entry(&self, category_id: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.id == category_id)
    }
}

impl QuestionBank for JsonBankLoader {
    async fn load(&self, category_id: &str) -> Result<Category, BankError> {
        let entry = self
            .entry(category_id)
            .ok_or_else(|| BankError::NotFound(category_id.to_string()))?;

        // The id resolved, so anything from here on is the document's fault.
        let path = self.bank_path(entry);
        let content =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| BankError::Malformed {
                    category: entry.id.clone(),
                    reason: format!("cannot read {}: {err}", path.display()),
                })?;
        let category = parse_category(entry, &content)?;

        debug!(
            category = %category.name,
            scales = category.scales.len(),
            questions = category.total_questions(),
            "Bank loaded"
        );
        Ok(category)
    }

    async fn categories(&self) -> Result<Vec<CategorySummary>, BankError> {
        Ok(self
            .catalog
            .iter()
            .map(|entry| CategorySummary {
                id: entry.id.clone(),
                label: entry.label.clone(),
            })
            .collect())
    }
}

/// Parse and validate one bank document into a category.
///
/// The category takes its public name from the catalog id; the document key
/// is only used to locate the scale list.
fn parse_category(entry: &CatalogEntry, content: &str) -> Result<Category, BankError> {
    let malformed = |reason: String| BankError::Malformed {
        category: entry.id.clone(),
        reason,
    };

    let document: serde_json::Value =
        serde_json::from_str(content).map_err(|err| malformed(format!("invalid JSON: {err}")))?;
    let scales_value = document
        .get(&entry.key)
        .cloned()
        .ok_or_else(|| malformed(format!("missing document key '{}'", entry.key)))?;
    let scales: Vec<Scale> = serde_json::from_value(scales_value)
        .map_err(|err| malformed(format!("invalid scale list: {err}")))?;

    let category = Category {
        name: entry.id.clone(),
        scales,
    };
    validate(&category).map_err(malformed)?;
    Ok(category)
}

/// Structural checks beyond what serde enforces: every scale has questions,
/// every question has options, option ids are unique per question.
fn validate(category: &Category) -> Result<(), String> {
    if category.scales.is_empty() {
        return Err("no scales".to_string());
    }
    for scale in &category.scales {
        if scale.title.trim().is_empty() {
            return Err("scale with an empty title".to_string());
        }
        if scale.questions.is_empty() {
            return Err(format!("scale '{}' has no questions", scale.title));
        }
        for question in &scale.questions {
            if question.options.is_empty() {
                return Err(format!("question '{}' has no options", question.text));
            }
            let mut seen = HashSet::new();
            for option in &question.options {
                if !seen.insert(option.id.as_str()) {
                    return Err(format!(
                        "question '{}' repeats option id '{}'",
                        question.text, option.id
                    ));
                }
            }
        }
    }
    Ok(())
}
