//! Durable session storage.
//!
//! The session store persists its token and role through a [`SessionStorage`]
//! implementation so a login survives a process restart. [`FileStorage`]
//! writes a JSON file; [`MemoryStorage`] backs tests and throwaway sessions.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Session data as written to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Durable key-value storage for the session.
///
/// Implementations must tolerate `clear` on an already-empty store.
pub trait SessionStorage: Send + Sync {
    /// Read the persisted session, or `None` if nothing is stored.
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;

    /// Persist the session, replacing any previous value.
    fn save(&self, session: &PersistedSession) -> Result<(), StorageError>;

    /// Remove the persisted session. A no-op when nothing is stored.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed session storage.
///
/// Stores the session as pretty-printed JSON at the given path, with
/// owner-only permissions on Unix.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage backed by the given file path.
    ///
    /// The file and its parent directory are created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&json)?;
        Ok(Some(session))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, &json)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory session storage.
///
/// Does not survive a restart; intended for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<PersistedSession>>,
}

impl MemoryStorage {
    /// Create empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        Ok(self.slot.lock().expect("storage lock poisoned").clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        *self.slot.lock().expect("storage lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().expect("storage lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        let session = PersistedSession {
            token: "T1".to_string(),
            role: Some("admin".to_string()),
        };
        storage.save(&session).unwrap();

        assert_eq!(storage.load().unwrap(), Some(session));
    }

    #[test]
    fn file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/data/session.json"));

        let session = PersistedSession {
            token: "T1".to_string(),
            role: None,
        };
        storage.save(&session).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn file_storage_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        let session = PersistedSession {
            token: "T1".to_string(),
            role: None,
        };
        storage.save(&session).unwrap();
        storage.clear().unwrap();

        assert!(!storage.path().exists());
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn file_storage_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.clear().unwrap();
        storage.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn file_storage_sets_owner_only_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage
            .save(&PersistedSession {
                token: "T1".to_string(),
                role: None,
            })
            .unwrap();

        let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);

        let session = PersistedSession {
            token: "T1".to_string(),
            role: None,
        };
        storage.save(&session).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session));

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }
}
