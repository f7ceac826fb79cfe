use crate::core::error::Result;
use crate::core::remote::Endpoint;
use crate::core::store::JsonBlob;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the endpoint configuration inside the data directory
pub const CONFIG_FILE: &str = "config.json";

/// Persisted application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Spreadsheet web app URL; empty means "not configured"
    #[serde(default)]
    pub sheet_url: String,
}

impl AppConfig {
    pub fn from_endpoint(endpoint: Option<&Endpoint>) -> Self {
        Self {
            sheet_url: endpoint.map(ToString::to_string).unwrap_or_default(),
        }
    }

    /// The configured endpoint, if any.
    ///
    /// A stored URL that no longer parses is treated as unconfigured.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match crate::validators::validate_endpoint(&self.sheet_url) {
            Ok(endpoint) => endpoint,
            Err(msg) => {
                tracing::warn!(url = %self.sheet_url, "Ignoring stored endpoint: {msg}");
                None
            }
        }
    }
}

pub fn config_blob(data_dir: &Path) -> JsonBlob<AppConfig> {
    JsonBlob::new(data_dir.join(CONFIG_FILE))
}

/// Loads the config, or returns default if not found or unreadable.
///
/// An unreadable file is moved aside so it is not silently overwritten.
pub async fn load_config(blob: &JsonBlob<AppConfig>) -> AppConfig {
    match blob.load().await {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to load configuration: {e}");
            if matches!(e, crate::Error::CorruptBlob { .. })
                && let Err(e) = blob.quarantine().await
            {
                tracing::error!("Failed to move corrupt configuration aside: {e}");
            }
            AppConfig::default()
        }
    }
}

/// Saves the config with the given revision.
///
/// Returns `Ok(false)` if a newer revision was already written.
pub async fn save_config(
    blob: &JsonBlob<AppConfig>,
    revision: u64,
    config: &AppConfig,
) -> Result<bool> {
    blob.save(revision, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn test_invalid_stored_url_is_unconfigured() {
        let config = AppConfig {
            sheet_url: "not a url".to_string(),
        };
        assert!(config.endpoint().is_none());
    }

    #[test]
    fn test_endpoint_round_trip() {
        let endpoint = Endpoint::parse("https://example.com/hook").unwrap();
        let config = AppConfig::from_endpoint(Some(&endpoint));
        assert_eq!(config.endpoint(), Some(endpoint));
        assert_eq!(AppConfig::from_endpoint(None).sheet_url, "");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let blob = config_blob(dir.path());
        assert_eq!(load_config(&blob).await, AppConfig::default());

        let config = AppConfig {
            sheet_url: "https://example.com/hook".to_string(),
        };
        assert!(save_config(&blob, 1, &config).await.unwrap());
        assert_eq!(load_config(&blob).await, config);
    }

    #[tokio::test]
    async fn test_corrupt_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let blob = config_blob(dir.path());
        tokio::fs::write(blob.path(), "sheet_url=").await.unwrap();

        assert_eq!(load_config(&blob).await, AppConfig::default());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_corrupt_config_in_readonly_dir_still_defaults() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let blob = config_blob(dir.path());
        tokio::fs::write(blob.path(), "{").await.unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o500)).unwrap();

        // Without write access the rename fails (root may still succeed);
        // either way loading falls back to defaults
        let config = load_config(&blob).await;
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o700)).unwrap();

        assert_eq!(config, AppConfig::default());
    }
}
