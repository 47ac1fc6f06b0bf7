//! Settings endpoints.

use serde_json::Value;
use tracing::instrument;

use motus_core::Result;

use crate::client::ApiClient;
use crate::request::RequestSpec;

/// Endpoint for reading and updating settings.
const SETTINGS: &str = "/settings";

/// Settings operations.
#[derive(Debug, Clone, Copy)]
pub struct SettingsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Settings endpoints.
    pub fn settings(&self) -> SettingsApi<'_> {
        SettingsApi { client: self }
    }
}

impl SettingsApi<'_> {
    /// Fetch the settings payload as the server sent it.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Value> {
        self.client.execute(SETTINGS, RequestSpec::get()).await
    }

    /// Replace settings with the caller's object, passed through
    /// unchanged.
    #[instrument(skip(self, data))]
    pub async fn update(&self, data: &Value) -> Result<Value> {
        self.client
            .execute(SETTINGS, RequestSpec::post().json(data.clone()))
            .await
    }
}
