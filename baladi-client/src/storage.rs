//! TokenStore - persistent credential slot
//!
//! A single JSON-backed slot for the auth token. The token survives
//! application restarts until an explicit logout clears it.

use serde::{Deserialize, Serialize};
use shared::error::{PortalError, PortalResult};
use std::path::{Path, PathBuf};

/// Stored token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    saved_at: i64,
}

/// File-backed slot for the `authToken` credential
#[derive(Debug, Clone)]
pub struct TokenStore {
    /// Slot file path: {dir}/auth_token.json
    file_path: PathBuf,
}

impl TokenStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join("auth_token.json"),
        }
    }

    /// Whether a token is currently stored
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Load the stored token, if any
    pub fn load(&self) -> PortalResult<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let stored: StoredToken = serde_json::from_str(&content)
            .map_err(|e| PortalError::storage(format!("Corrupt token slot: {}", e)))?;
        Ok(Some(stored.token))
    }

    /// Save a token, replacing any previous one
    pub fn save(&self, token: &str) -> PortalResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stored = StoredToken {
            token: token.to_string(),
            saved_at: shared::util::now_millis(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!("Auth token saved");
        Ok(())
    }

    /// Clear the slot; absent file is not an error
    pub fn clear(&self) -> PortalResult<()> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Auth token cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);

        store.save("mock-jwt-token-1").unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap().as_deref(), Some("mock-jwt-token-1"));

        store.clear().unwrap();
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);

        // Clearing an empty slot is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_token_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();

        TokenStore::new(temp_dir.path()).save("persisted").unwrap();

        // A fresh store over the same directory sees the token
        let reopened = TokenStore::new(temp_dir.path());
        assert_eq!(reopened.load().unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_corrupt_slot_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = TokenStore::new(temp_dir.path());

        std::fs::write(temp_dir.path().join("auth_token.json"), "not json").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, PortalError::Storage(_)));
    }
}
