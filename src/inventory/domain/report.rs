use super::{Application, ComponentHash};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// NewType wrapper for the scan identifier of a report
///
/// The scan id is not returned as a field by the server; it is the
/// second-to-last path segment of the report data URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(String);

impl ScanId {
    /// Extracts the scan id from a report data URL
    ///
    /// `api/v2/applications/my-app/reports/0a1b2c/raw` yields `0a1b2c`.
    /// A trailing separator counts as an empty last segment, so
    /// `.../reports/0a1b2c/` also yields `0a1b2c`.
    pub fn from_report_url(report_url: &str) -> Result<Self> {
        let segment = report_url
            .rsplit('/')
            .nth(1)
            .ok_or_else(|| InventoryError::MalformedReportUrl {
                url: report_url.to_string(),
            })?;
        Ok(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ReportRecord - one scan report of one application
///
/// Created by the report collection stage, then updated once by component
/// extraction, which fills `component_hashes` with the hashes this report
/// introduced into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    scan_id: ScanId,
    public_id: String,
    application_id: String,
    stage: String,
    report_url: String,
    component_hashes: Vec<ComponentHash>,
}

impl ReportRecord {
    pub fn new(application: &Application, stage: String, report_url: String) -> Result<Self> {
        let scan_id = ScanId::from_report_url(&report_url)?;
        Ok(Self {
            scan_id,
            public_id: application.public_id().to_string(),
            application_id: application.id().to_string(),
            stage,
            report_url,
            component_hashes: Vec::new(),
        })
    }

    pub fn scan_id(&self) -> &ScanId {
        &self.scan_id
    }

    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn stage(&self) -> &str {
        &self.stage
    }

    pub fn report_url(&self) -> &str {
        &self.report_url
    }

    pub fn component_hashes(&self) -> &[ComponentHash] {
        &self.component_hashes
    }

    /// Records that this report was the first to reference `hash`
    pub fn record_introduced(&mut self, hash: ComponentHash) {
        self.component_hashes.push(hash);
    }
}

/// ReportMap - accumulator of every collected report keyed by scan id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportMap {
    records: BTreeMap<ScanId, ReportRecord>,
}

impl ReportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a partial result into the map with plain key insertion
    ///
    /// Scan id collisions are not expected; if one occurs the incoming
    /// record replaces the existing one.
    pub fn merge(&mut self, partial: ReportMap) {
        self.records.extend(partial.records);
    }

    /// Inserts or replaces the record under its own scan id
    pub fn insert(&mut self, record: ReportRecord) {
        self.records.insert(record.scan_id().clone(), record);
    }

    pub fn get(&self, scan_id: &ScanId) -> Option<&ReportRecord> {
        self.records.get(scan_id)
    }

    pub fn records(&self) -> impl Iterator<Item = &ReportRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
