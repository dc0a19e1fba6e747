//! Local session persistence.
//!
//! The application-session contract: login writes a session, logout removes
//! it, everything in between reads it. The session lives in a JSON file under
//! the XDG data directory so it survives restarts; there is no ambient
//! global, the store is created once at the composition root and passed down
//! by reference.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ClientError, Result};
use crate::models::Session;

/// File-backed store for the logged-in session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the default XDG location:
    /// `$XDG_DATA_HOME/vetbook/session.json` or
    /// `~/.local/share/vetbook/session.json`.
    pub fn at_default_path() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("vetbook")
            .place_data_file("session.json")
            .map_err(|e| ClientError::XdgDirectory(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored session, if any.
    pub fn load(&self) -> Result<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::FileSystem {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    /// Reads the stored session or fails when nobody is logged in.
    pub fn require(&self) -> Result<Session> {
        self.load()?.ok_or(ClientError::NotLoggedIn)
    }

    /// Writes the session. Called by login only.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ClientError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw).map_err(|e| ClientError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;
        log::debug!("Session saved for user {}", session.user.id);
        Ok(())
    }

    /// Removes the session. Called by logout (and account deletion).
    /// Clearing an already-empty store is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::FileSystem {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session {
            user: User {
                id: 3,
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
            },
            token: Some("abc123".to_string()),
        }
    }

    fn temp_store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn test_load_without_session_returns_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        store.save(&sample_session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_session()));
    }

    #[test]
    fn test_require_without_session_fails() {
        let (_dir, store) = temp_store();
        assert!(matches!(
            store.require().unwrap_err(),
            ClientError::NotLoggedIn
        ));
    }

    #[test]
    fn test_clear_removes_session() {
        let (_dir, store) = temp_store();
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = temp_store();
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested/dirs/session.json"));
        store.save(&sample_session()).unwrap();
        assert!(store.load().unwrap().is_some());
    }
}
