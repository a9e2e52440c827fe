// ============================================================================
// TOKEN STORE - Single bearer credential, get/set/clear
// ============================================================================
// Expiry is not checked here; it belongs to the decoded session.
// ============================================================================

use std::cell::RefCell;

use crate::error::AppError;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_TOKEN};

pub trait TokenStore {
    fn set_credential(&self, value: &str) -> Result<(), AppError>;
    fn get_credential(&self) -> Option<String>;
    fn clear_credential(&self);
}

/// Browser-backed store scoped to the page origin
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY_TOKEN)
    }

    pub fn with_key(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn set_credential(&self, value: &str) -> Result<(), AppError> {
        save_to_storage(&self.key, &value)
    }

    fn get_credential(&self) -> Option<String> {
        load_from_storage::<String>(&self.key).filter(|token| !token.is_empty())
    }

    fn clear_credential(&self) {
        remove_from_storage(&self.key);
    }
}

/// In-memory store, used where browser storage is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    credential: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(value: &str) -> Self {
        Self {
            credential: RefCell::new(Some(value.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_credential(&self, value: &str) -> Result<(), AppError> {
        *self.credential.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn get_credential(&self) -> Option<String> {
        self.credential
            .borrow()
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn clear_credential(&self) {
        *self.credential.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get_credential(), None);

        store.set_credential("abc").unwrap();
        assert_eq!(store.get_credential().as_deref(), Some("abc"));

        store.set_credential("def").unwrap();
        assert_eq!(store.get_credential().as_deref(), Some("def"));

        store.clear_credential();
        assert_eq!(store.get_credential(), None);
    }

    #[test]
    fn empty_credential_reads_as_absent() {
        let store = MemoryTokenStore::with_credential("");
        assert_eq!(store.get_credential(), None);
    }
}
