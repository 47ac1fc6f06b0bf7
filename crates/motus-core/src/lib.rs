//! motus-core - Core types and traits for the motus API client.

pub mod credentials;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use credentials::Credentials;
pub use error::{ApiError, Error, InvalidInputError, StoreError};
pub use session::{AuthToken, Session, UserProfile};
pub use store::CredentialStore;
pub use types::ApiBase;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
