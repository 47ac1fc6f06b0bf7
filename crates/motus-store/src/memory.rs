//! In-process credential store.

use std::sync::Mutex;

use motus_core::error::StoreError;
use motus_core::session::{AuthToken, Session, UserProfile};
use motus_core::store::CredentialStore;

/// A credential store that lives only as long as the process.
///
/// Useful in tests and for callers that never want a session written
/// to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Session>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn token(&self) -> Option<AuthToken> {
        self.inner.lock().unwrap().token.clone()
    }

    fn set_token(&self, token: &AuthToken) -> Result<(), StoreError> {
        self.inner.lock().unwrap().token = Some(token.clone());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.inner.lock().unwrap().token = None;
        Ok(())
    }

    fn user(&self) -> Option<UserProfile> {
        self.inner.lock().unwrap().user.clone()
    }

    fn set_user(&self, user: &UserProfile) -> Result<(), StoreError> {
        self.inner.lock().unwrap().user = Some(user.clone());
        Ok(())
    }

    fn clear_user(&self) -> Result<(), StoreError> {
        self.inner.lock().unwrap().user = None;
        Ok(())
    }
}
