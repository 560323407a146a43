use super::BasicCredentials;
use crate::inventory::domain::{Application, ComponentHash};
use crate::ports::outbound::{ComponentEntry, IqRepository, ReportSummary};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Server used when none is given on the command line or in config
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8070";

#[derive(Debug, Deserialize)]
struct ReportDetails {
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelsResponse {
    labels_by_owner: Vec<OwnerLabels>,
}

#[derive(Debug, Deserialize)]
struct OwnerLabels {
    labels: Vec<LabelEntry>,
}

#[derive(Debug, Deserialize)]
struct LabelEntry {
    label: String,
}

/// IqServerClient adapter for the server's REST API
///
/// This adapter implements the IqRepository port. One instance owns a single
/// `reqwest::Client`, so every request of the run shares one connection pool
/// and one set of credentials.
///
/// Requests are issued exactly once: no timeout, no retry, no rate limit.
pub struct IqServerClient {
    client: reqwest::Client,
    base_url: String,
    credentials: BasicCredentials,
}

impl IqServerClient {
    /// Creates a client for the server at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not an http(s) URL or the HTTP client
    /// cannot be built
    pub fn new(base_url: &str, credentials: BasicCredentials) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let user_agent = format!("iq-label-inventory/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a server-relative path onto the base URL with a single separator
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issues an authenticated GET and normalizes the JSON payload
    ///
    /// A non-success status is logged with its body and yields `Ok(None)`.
    /// Transport failures and undecodable bodies are errors.
    async fn fetch(&self, url: &str, root_field: Option<&str>) -> Result<Option<Value>> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.password()),
            )
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if !status.is_success() {
            warn!(url, %status, body = %body, "server returned a non-success status");
            return Ok(None);
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&body)
            .with_context(|| format!("Failed to decode JSON response from {}", url))?;

        Ok(unwrap_payload(value, root_field))
    }

    /// Like [`fetch`](Self::fetch), then decodes the payload into `T`
    async fn fetch_as<T: DeserializeOwned>(
        &self,
        url: &str,
        root_field: Option<&str>,
    ) -> Result<Option<T>> {
        let Some(value) = self.fetch(url, root_field).await? else {
            return Ok(None);
        };

        let decoded = serde_json::from_value(value).map_err(|e| {
            InventoryError::UnexpectedPayload {
                url: url.to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(Some(decoded))
    }
}

#[async_trait]
impl IqRepository for IqServerClient {
    async fn fetch_applications(&self) -> Result<Vec<Application>> {
        let url = self.endpoint("api/v2/applications");
        let applications = self
            .fetch_as::<Vec<Application>>(&url, Some("applications"))
            .await?;
        Ok(applications.unwrap_or_default())
    }

    async fn fetch_reports(&self, application: &Application) -> Result<Option<Vec<ReportSummary>>> {
        let url = self.endpoint(&format!(
            "api/v2/reports/applications/{}",
            urlencoding::encode(application.id())
        ));
        self.fetch_as(&url, None).await
    }

    async fn fetch_report_components(
        &self,
        report_url: &str,
    ) -> Result<Option<Vec<ComponentEntry>>> {
        let url = self.endpoint(report_url);
        let details = self.fetch_as::<ReportDetails>(&url, None).await?;
        Ok(details.map(|d| d.components))
    }

    async fn fetch_labels(
        &self,
        application_public_id: &str,
        hash: &ComponentHash,
    ) -> Result<Option<Vec<String>>> {
        let url = self.endpoint(&format!(
            "rest/label/component/application/{}/{}",
            urlencoding::encode(application_public_id),
            urlencoding::encode(hash.as_str())
        ));
        let response = self.fetch_as::<LabelsResponse>(&url, None).await?;

        Ok(response.map(|r| {
            r.labels_by_owner
                .into_iter()
                .flat_map(|owner| owner.labels)
                .map(|entry| entry.label)
                .collect()
        }))
    }
}

/// Validates the server URL and strips trailing separators
fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(InventoryError::InvalidServerUrl {
            url: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        }
        .into());
    }

    Ok(trimmed.to_string())
}

/// Selects `root_field` from an object payload and collapses empty values
///
/// The root field is only taken when the payload is an object that has it;
/// otherwise the payload is kept whole. `null`, `[]`, `{}` and `""` all mean
/// "nothing here" and become `None`.
pub(crate) fn unwrap_payload(value: Value, root_field: Option<&str>) -> Option<Value> {
    let value = match (root_field, value) {
        (Some(field), Value::Object(mut map)) if map.contains_key(field) => {
            map.remove(field).unwrap_or(Value::Null)
        }
        (_, other) => other,
    };

    let empty = match &value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    };

    if empty {
        None
    } else {
        Some(value)
    }
}
