//! Session Store
//!
//! The username session, persisted in browser local storage.

use crate::error::AppError;
use crate::navigation::Navigator;

/// String key/value persistence
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage().ok_or_else(|| AppError::Storage("localStorage is not available".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Username session over a storage backend
#[derive(Clone, Debug)]
pub struct Session<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> Session<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Stored username; blank values count as absent
    pub fn get(&self) -> Option<String> {
        self.storage
            .get_item(&self.key)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }

    /// Persist a username, returning the trimmed value
    pub fn set(&self, name: &str) -> Result<String, AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Please enter a username"));
        }
        self.storage.set_item(&self.key, trimmed)?;
        log::info!("session set for {}", trimmed);
        Ok(trimmed.to_string())
    }

    /// Drop the session and reload so every view starts logged out
    pub fn clear(&self, navigator: &impl Navigator) {
        self.storage.remove_item(&self.key);
        log::info!("session cleared");
        navigator.reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStorage, RecordingNavigator};

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::default(), "username")
    }

    #[test]
    fn test_set_then_get_returns_trimmed() {
        let session = session();
        for name in ["alice", "  bob  ", "\tcarol d\n", "émile"] {
            let stored = session.set(name).unwrap();
            assert_eq!(stored, name.trim());
            assert_eq!(session.get().as_deref(), Some(name.trim()));
        }
    }

    #[test]
    fn test_empty_username_rejected_and_not_written() {
        let session = session();
        session.set("alice").unwrap();

        let err = session.set("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please enter a username");
        assert_eq!(session.get().as_deref(), Some("alice"));
    }

    #[test]
    fn test_blank_stored_value_is_absent() {
        let storage = MemoryStorage::default();
        storage.set_item("username", "   ").unwrap();
        let session = Session::new(storage, "username");
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_clear_removes_and_reloads() {
        let session = session();
        let navigator = RecordingNavigator::default();
        session.set("alice").unwrap();

        session.clear(&navigator);

        assert_eq!(session.get(), None);
        assert_eq!(navigator.reloads(), 1);
    }
}
