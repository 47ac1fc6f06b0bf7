//! Device registry endpoints.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use motus_core::Result;

use crate::client::ApiClient;
use crate::request::RequestSpec;

/// Endpoint for the device list.
const DEVICES: &str = "/devices";

/// Endpoint for device registration.
const REGISTER: &str = "/devices/register";

/// A registered sensing device.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    /// Hardware identifier reported by the device.
    pub device_id: String,
    /// Display name chosen at registration.
    pub name: String,
}

/// Response from the device list.
#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    devices: Vec<Device>,
}

/// Device registry operations.
#[derive(Debug, Clone, Copy)]
pub struct DevicesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Device registry endpoints.
    pub fn devices(&self) -> DevicesApi<'_> {
        DevicesApi { client: self }
    }
}

impl DevicesApi<'_> {
    /// List the registered devices.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Device>> {
        let response: DeviceListResponse =
            self.client.execute_as(DEVICES, RequestSpec::get()).await?;
        Ok(response.devices)
    }

    /// Register a device under a display name.
    #[instrument(skip(self))]
    pub async fn register(&self, device_id: &str, name: &str) -> Result<Value> {
        let body = json!({
            "device_id": device_id,
            "name": name,
        });

        self.client
            .execute(REGISTER, RequestSpec::post().json(body))
            .await
    }
}
