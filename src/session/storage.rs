//! Durable key-value backends for the session mirror.
//!
//! `BrowserStorage` wraps `window.localStorage` and is only live in `csr`
//! builds; elsewhere it behaves like storage that is permanently
//! unavailable. `MemoryStorage` is an in-process map used by tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USERNAME_KEY: &str = "username";

/// Every key the session writes, in write order.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, ROLE_KEY, USERNAME_KEY];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// String key-value persistence that survives reloads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage. Clones share the same map, so a test can keep a handle
/// while a store owns another and observe exactly what was persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with entries, as if written by an earlier run.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
