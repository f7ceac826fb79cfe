//! JSON blob persistence
//!
//! Each piece of persisted state (the contact list, the endpoint config)
//! lives in its own JSON file. Writes are atomic and stamped with a
//! revision: saves run as independent async tasks and may finish out of
//! order, so a save older than the last one written is dropped.

use crate::core::contact::Contact;
use crate::core::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A typed JSON file on disk
pub struct JsonBlob<T> {
    path: PathBuf,
    /// Revision of the last successful write
    written: Arc<Mutex<u64>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonBlob<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            written: Arc::clone(&self.written),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonBlob<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonBlob").field("path", &self.path).finish()
    }
}

impl<T: Serialize + DeserializeOwned> JsonBlob<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: Arc::new(Mutex::new(0)),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the blob. A missing file is `Ok(None)`; an unreadable one is
    /// [`Error::CorruptBlob`].
    pub async fn load(&self) -> Result<Option<T>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| Error::CorruptBlob {
                path: self.path.clone(),
                source,
            })
    }

    /// Moves an unreadable blob aside so the next save does not destroy it.
    ///
    /// Returns the new location.
    pub async fn quarantine(&self) -> Result<PathBuf> {
        let target = with_suffix(&self.path, ".corrupt");
        tokio::fs::rename(&self.path, &target).await?;
        tracing::warn!(from = %self.path.display(), to = %target.display(), "Quarantined corrupt file");
        Ok(target)
    }

    /// Writes `value` if `revision` is newer than the last write.
    ///
    /// Returns `Ok(false)` when the write was skipped as stale.
    pub async fn save(&self, revision: u64, value: &T) -> Result<bool> {
        let mut written = self.written.lock().await;
        if revision <= *written {
            tracing::debug!(
                path = %self.path.display(),
                revision,
                latest = *written,
                "Skipping stale write"
            );
            return Ok(false);
        }
        let json = serde_json::to_string_pretty(value)?;
        write_atomic(&self.path, json.as_bytes()).await?;
        *written = revision;
        Ok(true)
    }
}

/// File name of the contact list inside the data directory
pub const CONTACTS_FILE: &str = "contacts.json";

pub fn contacts_blob(data_dir: &Path) -> JsonBlob<Vec<Contact>> {
    JsonBlob::new(data_dir.join(CONTACTS_FILE))
}

/// Loads the stored contacts, newest first.
///
/// A missing file is an empty registry. A corrupt one is quarantined and
/// the registry starts empty. Duplicate identifiers keep their first entry.
pub async fn load_contacts(blob: &JsonBlob<Vec<Contact>>) -> Vec<Contact> {
    let contacts = match blob.load().await {
        Ok(contacts) => contacts.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Failed to load contacts: {e}");
            if matches!(e, Error::CorruptBlob { .. })
                && let Err(e) = blob.quarantine().await
            {
                tracing::error!("Failed to move corrupt contacts aside: {e}");
            }
            return Vec::new();
        }
    };

    let mut seen = std::collections::HashSet::with_capacity(contacts.len());
    let before = contacts.len();
    let contacts: Vec<Contact> = contacts.into_iter().filter(|c| seen.insert(c.id)).collect();
    if contacts.len() != before {
        tracing::warn!(dropped = before - contacts.len(), "Dropped contacts with duplicate ids");
    }
    tracing::info!(count = contacts.len(), "Loaded contacts");
    contacts
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Atomic write: temp file with restrictive permissions, fsync, rename.
///
/// On Unix the file is created with mode 0o600 before any data is written.
async fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let temp_path = with_suffix(path, ".tmp");

    #[cfg(unix)]
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .mode(0o600)
        .open(&temp_path)
        .await?;

    #[cfg(not(unix))]
    let mut file = tokio::fs::File::create(&temp_path).await?;

    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                format!(
                    "Disk full: cannot save {}. Free up space and try again.",
                    path.display()
                ),
            )
        } else {
            e
        }
    })
}
