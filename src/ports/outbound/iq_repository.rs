use crate::inventory::domain::{Application, ComponentHash};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One entry of an application's report list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub stage: String,
    pub report_data_url: String,
}

impl ReportSummary {
    pub fn new(stage: impl Into<String>, report_data_url: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            report_data_url: report_data_url.into(),
        }
    }
}

/// One entry of a report's component list
///
/// Every field is nullable on the wire. Entries without a hash cannot be
/// registered and are skipped by the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub package_url: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// IqRepository port for reading inventory data from the server
///
/// Each method maps to one GET request. `Ok(None)` means the server had
/// nothing to contribute for that unit of work (non-success status or an
/// empty payload); `Err` means the whole run must stop.
///
/// # Async Support
/// Implementations must be `Send + Sync`; a single instance is shared by
/// every in-flight request of every stage.
#[async_trait]
pub trait IqRepository: Send + Sync {
    /// Fetches every application registered with the server
    ///
    /// Returns an empty list when the server has no applications.
    async fn fetch_applications(&self) -> Result<Vec<Application>>;

    /// Fetches the report list of one application
    async fn fetch_reports(&self, application: &Application) -> Result<Option<Vec<ReportSummary>>>;

    /// Fetches the component list of one report
    ///
    /// # Arguments
    /// * `report_url` - The report data URL, relative to the server root
    ///
    /// # Errors
    /// Returns an error if a non-empty response lacks the component list
    async fn fetch_report_components(
        &self,
        report_url: &str,
    ) -> Result<Option<Vec<ComponentEntry>>>;

    /// Fetches the label names assigned to a component within one application
    ///
    /// Labels of all owners are flattened in the order the server returns them.
    ///
    /// # Errors
    /// Returns an error if a non-empty response lacks `labelsByOwner`
    async fn fetch_labels(
        &self,
        application_public_id: &str,
        hash: &ComponentHash,
    ) -> Result<Option<Vec<String>>>;
}
