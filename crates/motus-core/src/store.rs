//! Credential store trait.

use crate::error::StoreError;
use crate::session::{AuthToken, Session, UserProfile};

/// Durable storage for the current session.
///
/// Implementations persist two independent entries: the raw bearer
/// token and a JSON-serialized user profile. Reads fail closed —
/// missing or unreadable entries are reported as absent, never as
/// errors — so a damaged store degrades to an unauthenticated session
/// rather than a crash.
///
/// Storage is synchronous and local; the request layer reads the token
/// once per call, before the request is sent, so a store mutation
/// during an in-flight request does not affect that request.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token, if any. No side effects.
    fn token(&self) -> Option<AuthToken>;

    /// Stores a token, overwriting any existing one. Idempotent.
    fn set_token(&self, token: &AuthToken) -> Result<(), StoreError>;

    /// Removes the stored token. No-op when absent.
    fn clear_token(&self) -> Result<(), StoreError>;

    /// Returns the stored user profile, if any.
    ///
    /// A corrupt profile entry reads as absent; the token entry is
    /// unaffected.
    fn user(&self) -> Option<UserProfile>;

    /// Stores a user profile, overwriting any existing one.
    fn set_user(&self, user: &UserProfile) -> Result<(), StoreError>;

    /// Removes the stored profile. No-op when absent.
    fn clear_user(&self) -> Result<(), StoreError>;

    /// Returns true when a token is present.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns a snapshot of the current session.
    fn session(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }

    /// Clears both the token and the profile entry.
    fn clear_session(&self) -> Result<(), StoreError> {
        self.clear_token()?;
        self.clear_user()
    }
}
