//! motus-client - HTTP request layer for the motus monitoring API.

mod client;
pub mod endpoints;
mod request;

pub use client::ApiClient;
pub use request::{Body, RequestSpec};
