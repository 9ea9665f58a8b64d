//! User repository backed by in-memory storage.
//!
//! Keeps a single record under one key. Every save replaces the previous
//! value; reads return the stored text without decoding it.

use std::sync::Arc;

use serde::Serialize;

use common::AppResult;
use domain::{StoredRecord, USER_STORE_KEY};

use crate::infra::MemoryStorage;

/// User repository trait for dependency injection.
///
/// Failures never cross this boundary: a record that cannot be serialized
/// makes `save_user` return `false` and leaves the store as it was.
pub trait UserRepository<R>: Send + Sync {
    /// Serialize and store `record`, replacing any previous one
    fn save_user(&self, record: &R) -> bool;

    /// Raw stored record, or `None` if nothing has been saved
    fn get_all_users(&self) -> Option<StoredRecord>;
}

/// Concrete implementation of UserRepository over `MemoryStorage`
pub struct UserStore {
    storage: Arc<MemoryStorage>,
    key: String,
}

impl UserStore {
    /// Create new repository instance writing under the default key
    pub fn new(storage: Arc<MemoryStorage>) -> Self {
        Self::with_key(storage, USER_STORE_KEY)
    }

    /// Create new repository instance writing under `key`
    pub fn with_key(storage: Arc<MemoryStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Key this repository writes under
    pub fn key(&self) -> &str {
        &self.key
    }

    fn encode<R: Serialize>(record: &R) -> AppResult<String> {
        Ok(serde_json::to_string(record)?)
    }
}

impl<R: Serialize> UserRepository<R> for UserStore {
    fn save_user(&self, record: &R) -> bool {
        match Self::encode(record) {
            Ok(raw) => {
                self.storage.set_item(&self.key, raw);
                tracing::debug!(key = %self.key, "user record saved");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = ?e, "user record not saved");
                false
            }
        }
    }

    fn get_all_users(&self) -> Option<StoredRecord> {
        self.storage.get_item(&self.key).map(StoredRecord::from)
    }
}
