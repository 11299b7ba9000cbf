//! Session Store: the persisted "unlocked" flag.
//!
//! The flag is a single key in client-local durable storage whose value is the
//! literal `"true"` while unlocked and which is absent otherwise. Storage
//! failures never propagate out of the store: reads that fail are reported as
//! locked, writes that fail are logged and dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::db::Database;

/// Storage key holding the unlocked flag.
pub const SESSION_KEY: &str = "showcase_authenticated";

const UNLOCKED_VALUE: &str = "true";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<anyhow::Error> for StorageError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unavailable(format!("{:#}", e))
    }
}

/// Durable string storage the session flag is kept in.
pub trait SessionBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

impl SessionBackend for Database {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get_value(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.set_value(key, value)?)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.remove_value(key)?;
        Ok(())
    }
}

/// In-process backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every operation fails, like storage disabled by the client.
    pub fn unavailable() -> Self {
        Self {
            values: Arc::default(),
            unavailable: true,
        }
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        self.values
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.values()?.remove(key);
        Ok(())
    }
}

/// Owner of the persisted unlocked flag.
///
/// Only the access gate writes through this store. It has no expiry: once set,
/// the flag holds until [`SessionStore::clear`] runs.
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Whether the persisted flag says unlocked. Missing, unexpected or
    /// unreadable values all read as locked.
    pub fn load(&self) -> bool {
        match self.backend.read(SESSION_KEY) {
            Ok(value) => value.as_deref() == Some(UNLOCKED_VALUE),
            Err(e) => {
                tracing::warn!("Treating session as locked: {}", e);
                false
            }
        }
    }

    pub fn set_unlocked(&self) {
        if let Err(e) = self.backend.write(SESSION_KEY, UNLOCKED_VALUE) {
            tracing::warn!("Failed to persist unlocked session: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.delete(SESSION_KEY) {
            tracing::warn!("Failed to clear session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_false_when_never_set() {
        let store = SessionStore::new(MemoryBackend::new());
        assert!(!store.load());
    }

    #[test]
    fn set_then_clear_round_trips_through_backend() {
        let backend = MemoryBackend::new();
        let store = SessionStore::new(backend.clone());

        store.set_unlocked();
        assert!(store.load());
        assert_eq!(
            backend.read(SESSION_KEY).unwrap().as_deref(),
            Some("true")
        );

        store.clear();
        assert!(!store.load());
        assert!(backend.read(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn values_other_than_true_read_as_locked() {
        let backend = MemoryBackend::new();
        backend.write(SESSION_KEY, "TRUE").unwrap();
        let store = SessionStore::new(backend);
        assert!(!store.load());
    }

    #[test]
    fn unavailable_storage_is_swallowed_and_locked() {
        let store = SessionStore::new(MemoryBackend::unavailable());
        store.set_unlocked();
        assert!(!store.load());
        store.clear();
    }
}
