//! Global configuration loading.

use std::path::{Path, PathBuf};

use questa_types::config::GlobalConfig;

/// Load the global configuration from `{data_dir}/config.toml`.
///
/// A missing or unreadable file falls back to defaults so a fresh install
/// works without any setup.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let path = data_dir.join("config.toml");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "Invalid config.toml at {}: {err}, using defaults",
                    path.display()
                );
                GlobalConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            GlobalConfig::default()
        }
        Err(err) => {
            tracing::warn!(
                "Cannot read config.toml at {}: {err}, using defaults",
                path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Resolve the data directory.
///
/// Honors `QUESTA_DATA_DIR` when set, otherwise `~/.questa`, falling back to
/// a relative `.questa` when the home directory is unknown.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("QUESTA_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".questa"))
        .unwrap_or_else(|| PathBuf::from(".questa"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();

        let config = load_global_config(tmp.path()).await;

        assert_eq!(config.banks_dir, "banks");
        assert_eq!(config.answers_dir, "answers");
        assert_eq!(config.catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_valid_config_is_parsed() {
        let tmp = TempDir::new().unwrap();
        let content = r#"
banks_dir = "question-banks"
answers_dir = "logs"

[[catalog]]
id = "custom"
file = "custom.json"
key = "categories_custom"
label = "Custom: Pilot"
"#;
        tokio::fs::write(tmp.path().join("config.toml"), content)
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;

        assert_eq!(config.banks_dir, "question-banks");
        assert_eq!(config.answers_dir, "logs");
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog[0].id, "custom");
        assert_eq!(config.catalog[0].label, "Custom: Pilot");
    }

    #[tokio::test]
    async fn test_invalid_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "banks_dir = [broken")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;

        assert_eq!(config.banks_dir, "banks");
        assert_eq!(config.catalog.len(), 3);
    }

    #[test]
    fn test_resolve_data_dir_honors_env_var() {
        // SAFETY: test runs single-threaded with respect to this env var
        unsafe {
            std::env::set_var("QUESTA_DATA_DIR", "/tmp/questa-test");
        }

        let dir = resolve_data_dir();

        unsafe {
            std::env::remove_var("QUESTA_DATA_DIR");
        }
        assert_eq!(dir, PathBuf::from("/tmp/questa-test"));
    }
}
