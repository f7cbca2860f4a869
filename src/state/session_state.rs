// ============================================================================
// SESSION STATE - Token lifecycle (single source of truth)
// ============================================================================
// The store owns the Session. Consumers read snapshots and go through
// login()/logout(); nothing else writes the token. Storage and navigation
// are injected so the store runs outside the browser.
// ============================================================================

use std::rc::Rc;

use thiserror::Error;

use super::reactivity::{ReactiveState, SubscriptionId};
use crate::routing::{Redirect, Route};
use crate::services::storage::TokenStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    /// True until the persisted token has been read, then false for good
    pub is_loading: bool,
}

impl Session {
    fn loading() -> Self {
        Self {
            token: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.is_loading && self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the API returned an empty token")]
    EmptyToken,
}

/// What every protected view needs from the session
pub trait SessionAccess {
    fn token(&self) -> Option<String>;
    fn is_loading(&self) -> bool;
    fn login(&self, token: &str) -> Result<(), SessionError>;
    fn logout(&self);
}

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<Session>,
    storage: Rc<dyn TokenStorage>,
    redirect: Rc<dyn Redirect>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn TokenStorage>, redirect: Rc<dyn Redirect>) -> Self {
        Self {
            state: ReactiveState::new(Session::loading()),
            storage,
            redirect,
        }
    }

    /// Reads the persisted token. Only the first call does anything.
    pub fn initialize(&self) {
        if !self.state.with(|s| s.is_loading) {
            log::debug!("🔁 [SESSION] initialize() already ran, ignoring");
            return;
        }
        let token = self.storage.read();
        match &token {
            Some(_) => log::info!("💾 [SESSION] Stored token found"),
            None => log::info!("ℹ️ [SESSION] No stored token"),
        }
        self.state.set(Session {
            token,
            is_loading: false,
        });
    }

    pub fn snapshot(&self) -> Session {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    /// Same store behind both handles?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl SessionAccess for SessionStore {
    fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    /// The token is opaque: stored and sent back exactly as received
    fn login(&self, token: &str) -> Result<(), SessionError> {
        if token.trim().is_empty() {
            log::warn!("⚠️ [SESSION] Refusing to store an empty token");
            return Err(SessionError::EmptyToken);
        }
        self.storage.write(token);
        self.state.update(|s| s.token = Some(token.to_string()));
        log::info!("✅ [SESSION] Logged in");
        Ok(())
    }

    fn logout(&self) {
        self.storage.clear();
        self.state.update(|s| s.token = None);
        log::info!("👋 [SESSION] Logged out");
        self.redirect.replace(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::routing::redirect::testing::RecordingRedirect;
    use crate::services::storage::MemoryTokenStorage;

    fn store_with(storage: &MemoryTokenStorage) -> (SessionStore, RecordingRedirect) {
        let redirect = RecordingRedirect::default();
        let store = SessionStore::new(Rc::new(storage.clone()), Rc::new(redirect.clone()));
        (store, redirect)
    }

    #[test]
    fn starts_loading_without_token() {
        let (store, _) = store_with(&MemoryTokenStorage::with_value("abc"));
        assert!(store.is_loading());
        assert_eq!(store.token(), None);
        assert!(!store.snapshot().is_authenticated());
    }

    #[test]
    fn initialize_finishes_loading_for_any_stored_value() {
        for storage in [
            MemoryTokenStorage::with_value("xyz123"),
            MemoryTokenStorage::new(),
            MemoryTokenStorage::with_value(""),
            MemoryTokenStorage::with_value("   "),
        ] {
            let (store, redirect) = store_with(&storage);
            store.initialize();
            assert!(!store.is_loading());
            assert!(redirect.routes().is_empty());
        }
    }

    #[test]
    fn initialize_restores_stored_token() {
        let (store, _) = store_with(&MemoryTokenStorage::with_value("xyz123"));
        store.initialize();
        assert_eq!(store.token().as_deref(), Some("xyz123"));
        assert!(store.snapshot().is_authenticated());
    }

    #[test]
    fn malformed_stored_value_means_logged_out() {
        let (store, _) = store_with(&MemoryTokenStorage::with_value(" "));
        store.initialize();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn initialize_reads_storage_only_once() {
        let storage = MemoryTokenStorage::new();
        let (store, _) = store_with(&storage);
        store.initialize();
        storage.write("sneaky");
        store.initialize();
        assert_eq!(store.token(), None);
        assert!(!store.is_loading());
    }

    #[test]
    fn login_is_visible_immediately_and_persisted() {
        let storage = MemoryTokenStorage::new();
        let (store, redirect) = store_with(&storage);
        store.initialize();
        store.login("abc").unwrap();
        assert_eq!(store.token().as_deref(), Some("abc"));
        assert_eq!(storage.raw().as_deref(), Some("abc"));
        assert!(redirect.routes().is_empty());
    }

    #[test]
    fn login_survives_a_restart() {
        let storage = MemoryTokenStorage::new();
        let (store, _) = store_with(&storage);
        store.initialize();
        store.login("abc").unwrap();

        let (restarted, _) = store_with(&storage);
        assert!(restarted.is_loading());
        restarted.initialize();
        assert_eq!(restarted.token().as_deref(), Some("abc"));
    }

    #[test]
    fn token_is_stored_verbatim() {
        let storage = MemoryTokenStorage::new();
        let (store, _) = store_with(&storage);
        store.initialize();
        store.login(" abc ").unwrap();
        assert_eq!(store.token().as_deref(), Some(" abc "));
        assert_eq!(storage.raw().as_deref(), Some(" abc "));
    }

    #[test]
    fn empty_token_is_rejected_without_side_effects() {
        let storage = MemoryTokenStorage::new();
        let (store, _) = store_with(&storage);
        store.initialize();
        assert_eq!(store.login("  "), Err(SessionError::EmptyToken));
        assert_eq!(store.token(), None);
        assert_eq!(storage.raw(), None);
    }

    #[test]
    fn logout_clears_everything_and_redirects_once() {
        let storage = MemoryTokenStorage::new();
        let (store, redirect) = store_with(&storage);
        store.initialize();
        store.login("abc").unwrap();
        store.logout();
        assert_eq!(store.token(), None);
        assert_eq!(storage.raw(), None);
        assert_eq!(redirect.routes(), vec![Route::Login]);
    }

    #[test]
    fn repeated_login_logout_cycles_redirect_per_logout() {
        let storage = MemoryTokenStorage::new();
        let (store, redirect) = store_with(&storage);
        store.initialize();
        for token in ["a", "b", "c"] {
            store.login(token).unwrap();
            store.logout();
            assert_eq!(store.token(), None);
            assert_eq!(storage.raw(), None);
        }
        assert_eq!(redirect.routes(), vec![Route::Login; 3]);
    }

    #[test]
    fn logout_when_logged_out_still_redirects() {
        let (store, redirect) = store_with(&MemoryTokenStorage::new());
        store.initialize();
        store.logout();
        store.logout();
        assert_eq!(store.token(), None);
        assert!(!store.is_loading());
        assert_eq!(redirect.routes(), vec![Route::Login, Route::Login]);
    }

    #[test]
    fn subscribers_hear_every_change() {
        let (store, _) = store_with(&MemoryTokenStorage::new());
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = hits.clone();
            store.subscribe(move || hits.set(hits.get() + 1))
        };
        store.initialize();
        store.login("abc").unwrap();
        store.logout();
        assert_eq!(hits.get(), 3);

        store.unsubscribe(id);
        store.login("def").unwrap();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn clones_share_the_session() {
        let (store, _) = store_with(&MemoryTokenStorage::new());
        let other = store.clone();
        store.initialize();
        store.login("abc").unwrap();
        assert_eq!(other.token().as_deref(), Some("abc"));
        assert!(store.ptr_eq(&other));
    }
}
