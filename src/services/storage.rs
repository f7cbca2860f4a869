// ============================================================================
// TOKEN STORAGE - Durable client-side storage for the bearer token
// ============================================================================
// Layout: a single localStorage entry, key "token", value = raw token string.
// Storage failures never reach the caller: an unavailable storage reads as
// "no token" and failed writes are logged.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_STORAGE_KEY;

pub trait TokenStorage {
    /// Persisted token, if any. Blank values count as absent.
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// Browser `localStorage` backend
#[derive(Debug, Clone)]
pub struct LocalTokenStorage {
    key: &'static str,
}

impl LocalTokenStorage {
    pub fn new() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }

    fn storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl Default for LocalTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStorage for LocalTokenStorage {
    fn read(&self) -> Option<String> {
        let Some(storage) = Self::storage() else {
            log::warn!("⚠️ [STORAGE] localStorage unavailable, starting without token");
            return None;
        };
        match storage.get_item(self.key) {
            Ok(value) => normalize(value),
            Err(e) => {
                log::warn!("⚠️ [STORAGE] Could not read '{}': {:?}", self.key, e);
                None
            }
        }
    }

    fn write(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("⚠️ [STORAGE] localStorage unavailable, token kept in memory only");
            return;
        };
        if let Err(e) = storage.set_item(self.key, token) {
            log::warn!("⚠️ [STORAGE] Could not write '{}': {:?}", self.key, e);
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(self.key) {
            log::warn!("⚠️ [STORAGE] Could not remove '{}': {:?}", self.key, e);
        }
    }
}

/// In-memory backend. Clones share the same slot, which is how tests
/// simulate a reload against the same durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `raw` (stored verbatim, even if blank)
    pub fn with_value(raw: &str) -> Self {
        let storage = Self::new();
        *storage.slot.borrow_mut() = Some(raw.to_string());
        storage
    }

    /// Raw stored value, bypassing normalization
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn read(&self) -> Option<String> {
        normalize(self.raw())
    }

    fn write(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_reads_none() {
        assert_eq!(MemoryTokenStorage::new().read(), None);
    }

    #[test]
    fn blank_values_read_as_absent() {
        assert_eq!(MemoryTokenStorage::with_value("").read(), None);
        assert_eq!(MemoryTokenStorage::with_value("  \n").read(), None);
    }

    #[test]
    fn write_is_stored_verbatim() {
        let storage = MemoryTokenStorage::new();
        storage.write("abc");
        assert_eq!(storage.raw().as_deref(), Some("abc"));
        assert_eq!(storage.read().as_deref(), Some("abc"));
    }

    #[test]
    fn clones_share_the_slot() {
        let storage = MemoryTokenStorage::new();
        let reloaded = storage.clone();
        storage.write("xyz");
        assert_eq!(reloaded.read().as_deref(), Some("xyz"));
        reloaded.clear();
        assert_eq!(storage.raw(), None);
    }
}
