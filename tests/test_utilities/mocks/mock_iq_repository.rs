use async_trait::async_trait;
use iq_label_inventory::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory IQ server
///
/// Reports and component lists registered with `None` behave like a
/// non-success response. Every lookup yields once to the scheduler while it
/// is counted as in flight, so tests can observe how many requests a stage
/// keeps open at the same time. Clones share their request counters.
#[derive(Default, Clone)]
pub struct MockIqRepository {
    applications: Vec<Application>,
    reports: HashMap<String, Option<Vec<ReportSummary>>>,
    components: HashMap<String, Option<Vec<ComponentEntry>>>,
    labels: HashMap<(String, String), Vec<String>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    label_requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockIqRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application(mut self, id: &str, public_id: &str) -> Self {
        self.applications.push(Application::new(id, public_id));
        self
    }

    pub fn with_report(mut self, application_id: &str, stage: &str, report_url: &str) -> Self {
        self.reports
            .entry(application_id.to_string())
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
            .push(ReportSummary::new(stage, report_url));
        self
    }

    /// The reports endpoint of this application answers with a non-success status
    pub fn with_failed_reports(mut self, application_id: &str) -> Self {
        self.reports.insert(application_id.to_string(), None);
        self
    }

    pub fn with_component(
        mut self,
        report_url: &str,
        hash: Option<&str>,
        display_name: Option<&str>,
    ) -> Self {
        self.components
            .entry(report_url.to_string())
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
            .push(ComponentEntry {
                hash: hash.map(str::to_string),
                package_url: display_name.map(|n| format!("pkg:generic/{}", n)),
                display_name: display_name.map(str::to_string),
            });
        self
    }

    /// The report details endpoint answers with a non-success status
    pub fn with_failed_components(mut self, report_url: &str) -> Self {
        self.components.insert(report_url.to_string(), None);
        self
    }

    pub fn with_labels(mut self, public_id: &str, hash: &str, labels: &[&str]) -> Self {
        self.labels.insert(
            (public_id.to_string(), hash.to_string()),
            labels.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    pub fn label_requests(&self) -> Vec<(String, String)> {
        self.label_requests.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl IqRepository for MockIqRepository {
    async fn fetch_applications(&self) -> Result<Vec<Application>> {
        self.enter().await;
        Ok(self.applications.clone())
    }

    async fn fetch_reports(&self, application: &Application) -> Result<Option<Vec<ReportSummary>>> {
        self.enter().await;
        Ok(match self.reports.get(application.id()) {
            Some(reports) => reports.clone(),
            None => Some(Vec::new()),
        })
    }

    async fn fetch_report_components(
        &self,
        report_url: &str,
    ) -> Result<Option<Vec<ComponentEntry>>> {
        self.enter().await;
        Ok(match self.components.get(report_url) {
            Some(components) => components.clone(),
            None => Some(Vec::new()),
        })
    }

    async fn fetch_labels(
        &self,
        application_public_id: &str,
        hash: &ComponentHash,
    ) -> Result<Option<Vec<String>>> {
        self.label_requests
            .lock()
            .unwrap()
            .push((application_public_id.to_string(), hash.to_string()));
        self.enter().await;
        Ok(self
            .labels
            .get(&(application_public_id.to_string(), hash.to_string()))
            .cloned())
    }
}
