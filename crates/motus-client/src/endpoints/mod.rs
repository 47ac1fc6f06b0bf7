//! Typed endpoint modules.
//!
//! Each module maps typed arguments to a request and delegates to the
//! executor; no argument validation happens here.

pub mod auth;
pub mod devices;
pub mod history;
pub mod settings;

pub use auth::{AuthApi, AuthResponse};
pub use devices::{Device, DevicesApi};
pub use history::{Activity, HistoryApi, HistoryQuery};
pub use settings::SettingsApi;
