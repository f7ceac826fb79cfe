use std::path::PathBuf;
use thiserror::Error;

/// Core error types for contactbook
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport-level failure talking to the spreadsheet endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint URL could not be parsed or uses an unsupported scheme
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// A stored blob exists but does not deserialize
    #[error("Stored data is corrupted: {}", path.display())]
    CorruptBlob {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Represents a translated error with helpful context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTranslation {
    pub user_message: String,
    pub suggestions: Vec<String>,
}

impl ErrorTranslation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            user_message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl Error {
    /// Translates a failed remote submission into the warning shown to the user.
    ///
    /// The local save has always happened by the time this is shown, so the
    /// message leads with that.
    pub fn sync_translation(&self) -> ErrorTranslation {
        let base = ErrorTranslation::new(
            "Saved locally, but sending to the spreadsheet failed. Check the URL in settings.",
        );
        match self {
            Self::Http(e) if e.is_connect() => base
                .with_suggestion("Could not connect to the endpoint host")
                .with_suggestion("Check your network connection"),
            Self::Http(e) if e.is_timeout() => {
                base.with_suggestion("The endpoint took too long to respond")
            }
            _ => base.with_suggestion(
                "Make sure the script is deployed as a web app with access for anyone",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_leads_with_local_save() {
        let translation = Error::InvalidEndpoint("nope".to_string()).sync_translation();
        assert!(translation.user_message.contains("Saved locally"));
        assert!(translation.user_message.contains("settings"));
        assert!(translation.suggestions.iter().any(|s| s.contains("web app")));
    }

    #[test]
    fn test_generic_translation_has_suggestion() {
        let io = std::io::Error::other("boom");
        let translation = Error::Io(io).sync_translation();
        assert!(translation.user_message.contains("spreadsheet"));
        assert_eq!(translation.suggestions.len(), 1);
    }

    #[test]
    fn test_corrupt_blob_display_names_path() {
        let source = serde_json::from_str::<u32>("{").unwrap_err();
        let err = Error::CorruptBlob {
            path: PathBuf::from("/tmp/contacts.json"),
            source,
        };
        assert!(err.to_string().contains("contacts.json"));
    }
}
