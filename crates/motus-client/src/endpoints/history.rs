//! Activity history endpoints.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;
use url::form_urlencoded;

use motus_core::Result;

use crate::client::ApiClient;
use crate::request::RequestSpec;

/// Endpoint for the activity history.
const HISTORY: &str = "/history";

/// Endpoint for persisting a classified interval.
const SAVE: &str = "/history/save";

/// A classified activity interval.
///
/// Timestamps are epoch milliseconds; `confidence` is the classifier's
/// score in `0.0..=1.0`.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub device_id: Option<String>,
    pub start_ts: i64,
    pub end_ts: i64,
    pub label: String,
    pub confidence: f64,
}

impl Activity {
    /// Interval duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.end_ts - self.start_ts) as f64 / 1000.0
    }
}

/// Response from the history query.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    activities: Vec<Activity>,
}

/// Filters for a history query.
///
/// Absent fields are omitted from the query string entirely; present
/// fields are sent as given, even when empty or zero.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    device_id: Option<String>,
    from: Option<String>,
    to: Option<String>,
    limit: Option<u32>,
}

impl HistoryQuery {
    /// A query with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one device.
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Lower time bound, passed through to the server as given.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Upper time bound, passed through to the server as given.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Maximum number of intervals to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the query string, including the leading `?`, or an empty
    /// string when no filter is set.
    pub(crate) fn to_query_string(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        let mut any = false;

        if let Some(ref device_id) = self.device_id {
            params.append_pair("device_id", device_id);
            any = true;
        }
        if let Some(ref from) = self.from {
            params.append_pair("from", from);
            any = true;
        }
        if let Some(ref to) = self.to {
            params.append_pair("to", to);
            any = true;
        }
        if let Some(limit) = self.limit {
            params.append_pair("limit", &limit.to_string());
            any = true;
        }

        if any {
            format!("?{}", params.finish())
        } else {
            String::new()
        }
    }
}

/// Activity history operations.
#[derive(Debug, Clone, Copy)]
pub struct HistoryApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Activity history endpoints.
    pub fn history(&self) -> HistoryApi<'_> {
        HistoryApi { client: self }
    }
}

impl HistoryApi<'_> {
    /// Fetch classified intervals matching the query.
    #[instrument(skip(self))]
    pub async fn recent(&self, query: &HistoryQuery) -> Result<Vec<Activity>> {
        let endpoint = format!("{}{}", HISTORY, query.to_query_string());
        let response: HistoryResponse =
            self.client.execute_as(&endpoint, RequestSpec::get()).await?;
        Ok(response.activities)
    }

    /// Persist one classified interval.
    #[instrument(skip(self))]
    pub async fn save(
        &self,
        device_id: &str,
        start_ts: i64,
        end_ts: i64,
        label: &str,
        confidence: f64,
    ) -> Result<Value> {
        let body = json!({
            "device_id": device_id,
            "start_ts": start_ts,
            "end_ts": end_ts,
            "label": label,
            "confidence": confidence,
        });

        self.client
            .execute(SAVE, RequestSpec::post().json(body))
            .await
    }
}
