use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use uuid::Uuid;

use super::traits::SavingsRemote;
use crate::errors::CoreError;
use crate::models::saving::Saving;
use crate::models::settings::Settings;

const REMOTE_NAME: &str = "SavingsApi";

/// HTTP client for the savings backend.
///
/// - `POST /api/savings`: store one saving (`{"saving": {amount, hours, month}}`)
/// - `POST /api/sync`: store a batch (`{"savings": [...]}`)
/// - `GET /api/sync`: fetch all savings of the signed-in user
///
/// Every response is wrapped in `{"success": bool, "data": ..., "error": "..."}`.
/// Requests carry the session token as a bearer credential.
pub struct HttpSavingsRemote {
    client: Client,
    base_url: String,
}

impl HttpSavingsRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a client for the server configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        match settings.server_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(Self::new(url)),
            _ => Err(CoreError::ValidationError(
                "No server URL configured for savings replication".into(),
            )),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ── Wire types ──────────────────────────────────────────────────────

/// Response envelope shared by every endpoint.
#[derive(Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Serialize)]
struct NewSaving<'a> {
    amount: f64,
    hours: f64,
    month: &'a str,
}

#[derive(Serialize)]
struct PushSavingRequest<'a> {
    saving: NewSaving<'a>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteSaving {
    id: String,
    amount: f64,
    hours: f64,
    month: String,
    created_at: String,
}

#[derive(Serialize)]
struct PushBatchRequest {
    savings: Vec<RemoteSaving>,
}

#[derive(Deserialize)]
struct SyncData {
    #[serde(default)]
    savings: Vec<RemoteSaving>,
}

impl From<&Saving> for RemoteSaving {
    fn from(s: &Saving) -> Self {
        Self {
            id: s.id.to_string(),
            amount: s.amount,
            hours: s.hours,
            month: s.month.clone(),
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<RemoteSaving> for Saving {
    type Error = CoreError;

    fn try_from(r: RemoteSaving) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&r.id).map_err(|e| api_error(format!("Invalid saving id '{}': {e}", r.id)))?;
        let created_at = parse_timestamp(&r.created_at)
            .ok_or_else(|| api_error(format!("Invalid createdAt '{}'", r.created_at)))?;
        Ok(Saving {
            id,
            amount: r.amount,
            hours: r.hours,
            month: r.month,
            created_at,
        })
    }
}

/// RFC 3339, or a timestamp without offset which is taken as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn api_error(message: impl Into<String>) -> CoreError {
    CoreError::Api {
        remote: REMOTE_NAME.into(),
        message: message.into(),
    }
}

// ── Response decoding ───────────────────────────────────────────────

fn decode_envelope<T: serde::de::DeserializeOwned>(body: &str) -> Result<Option<T>, CoreError> {
    let resp: ApiResponse<T> = serde_json::from_str(body)
        .map_err(|e| api_error(format!("Failed to parse response: {e}")))?;
    if !resp.success {
        return Err(api_error(
            resp.error.unwrap_or_else(|| "request was rejected".into()),
        ));
    }
    Ok(resp.data)
}

/// Check a write response (`POST /api/savings`, `POST /api/sync`).
pub fn decode_ack(body: &str) -> Result<(), CoreError> {
    decode_envelope::<serde_json::Value>(body).map(|_| ())
}

/// Decode the savings list from `GET /api/sync`. A missing `data` field
/// means the user has no savings yet.
pub fn decode_savings(body: &str) -> Result<Vec<Saving>, CoreError> {
    let data = decode_envelope::<SyncData>(body)?;
    data.map(|d| d.savings)
        .unwrap_or_default()
        .into_iter()
        .map(Saving::try_from)
        .collect()
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SavingsRemote for HttpSavingsRemote {
    fn name(&self) -> &str {
        REMOTE_NAME
    }

    async fn push_saving(&self, token: &str, saving: &Saving) -> Result<(), CoreError> {
        let body = PushSavingRequest {
            saving: NewSaving {
                amount: saving.amount,
                hours: saving.hours,
                month: &saving.month,
            },
        };

        let text = self
            .client
            .post(self.url("/api/savings"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .text()
            .await?;

        decode_ack(&text)
    }

    async fn push_batch(&self, token: &str, savings: &[Saving]) -> Result<(), CoreError> {
        let body = PushBatchRequest {
            savings: savings.iter().map(RemoteSaving::from).collect(),
        };

        let text = self
            .client
            .post(self.url("/api/sync"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .text()
            .await?;

        decode_ack(&text)
    }

    async fn fetch_savings(&self, token: &str) -> Result<Vec<Saving>, CoreError> {
        let text = self
            .client
            .get(self.url("/api/sync"))
            .bearer_auth(token)
            .send()
            .await?
            .text()
            .await?;

        decode_savings(&text)
    }
}
