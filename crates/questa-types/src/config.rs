//! Global configuration types for Questa.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls where
//! bank files and answer logs live and which categories appear in the menu.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Questa service.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults;
/// the default catalog is the three Hogan-style inventories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory holding bank JSON files, relative to the data dir.
    #[serde(default = "default_banks_dir")]
    pub banks_dir: String,

    /// Directory answer logs are appended under, relative to the data dir.
    #[serde(default = "default_answers_dir")]
    pub answers_dir: String,

    /// Categories offered in the menu, in display order.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

fn default_banks_dir() -> String {
    "banks".to_string()
}

fn default_answers_dir() -> String {
    "answers".to_string()
}

fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: "hpi".to_string(),
            file: "hpi.json".to_string(),
            key: "categories_hpi".to_string(),
            label: "HPI: Adjustment".to_string(),
        },
        CatalogEntry {
            id: "hds".to_string(),
            file: "hds.json".to_string(),
            key: "categories_hds".to_string(),
            label: "HDS: Excitable".to_string(),
        },
        CatalogEntry {
            id: "mvpi".to_string(),
            file: "mvpi.json".to_string(),
            key: "categories_mvpi".to_string(),
            label: "MVPI: Recognition".to_string(),
        },
    ]
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            banks_dir: default_banks_dir(),
            answers_dir: default_answers_dir(),
            catalog: default_catalog(),
        }
    }
}

impl GlobalConfig {
    /// Look up a catalog entry by category id.
    pub fn catalog_entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.id == id)
    }
}

/// One category the service offers: where its bank lives and how it shows
/// up in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Public category id (menu selections, answer log file names).
    pub id: String,
    /// Bank file name inside `banks_dir`.
    pub file: String,
    /// Top-level key inside the bank document that holds the scale list.
    pub key: String,
    /// Human-readable menu label.
    pub label: String,
}
