use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::domain::{
    Application, Component, ComponentHash, ComponentRegistry, ReportMap, ReportRecord, Usage,
};
use crate::inventory::services::{FilterSummary, InventoryFilter};
use crate::ports::outbound::{ComponentEntry, IqRepository, ProgressReporter};
use crate::shared::Result;
use futures::future;
use futures::stream::{self, StreamExt};
use tracing::debug;

/// HarvestInventoryUseCase - Core use case for building the labeled inventory
///
/// Runs four dependent stages, each a barrier for the next:
///
/// 1. list applications
/// 2. collect reports (one request per application)
/// 3. extract components (one request per report)
/// 4. resolve labels (one request per component usage)
///
/// and finally filters the registry down to labeled usages.
///
/// Within a stage all requests run concurrently on the calling task and
/// their results are merged in completion order. Only this driver touches
/// the accumulators, after each unit of work has finished, so a component
/// hash is checked and inserted in one uninterrupted step.
///
/// # Type Parameters
/// * `REPO` - IqRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct HarvestInventoryUseCase<REPO, PR> {
    repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> HarvestInventoryUseCase<REPO, PR>
where
    REPO: IqRepository,
    PR: ProgressReporter,
{
    /// Creates a new HarvestInventoryUseCase with injected dependencies
    pub fn new(repository: REPO, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Executes the harvest
    ///
    /// # Errors
    /// Any transport failure, undecodable payload or malformed report URL
    /// aborts the whole run. Non-success responses do not: they only drop
    /// the unit of work that requested them.
    pub async fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        self.progress_reporter.report("   === start ===   ");

        // Stage 1: applications
        let applications = self.list_applications().await?;

        // Stage 2: reports
        let mut reports = self.collect_all_reports(&applications, &request).await?;

        // Stage 3: components
        let mut registry = self.extract_all_components(&mut reports, &request).await?;
        let components_found = registry.len();

        // Stage 4: labels
        self.resolve_all_labels(&mut registry, &request).await?;

        let filter_summary = self.filter_inventory(&mut registry);

        Ok(InventoryResponse {
            application_count: applications.len(),
            reports,
            components_found,
            filter_summary,
            inventory: registry,
        })
    }

    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.progress_reporter.report("📋 Fetching list of all applications...");

        let applications = self.repository.fetch_applications().await?;

        self.progress_reporter.report(&format!(
            " -- {} total apps found",
            applications.len()
        ));
        Ok(applications)
    }

    async fn collect_all_reports(
        &self,
        applications: &[Application],
        request: &InventoryRequest,
    ) -> Result<ReportMap> {
        self.progress_reporter
            .report("📑 Fetching all the reports for apps...");

        let total = applications.len();
        let mut reports = ReportMap::new();
        let mut pending = stream::iter(applications)
            .map(|application| self.collect_reports(application))
            .buffer_unordered(request.fan_out_width(total));

        let mut done = 0;
        while let Some(partial) = pending.next().await {
            reports.merge(partial?);
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("Fetching reports..."));
        }

        self.progress_reporter
            .report_completion(&format!(" -- {} total reports found", reports.len()));
        Ok(reports)
    }

    /// Report Collector: one application's reports, keyed by scan id
    async fn collect_reports(&self, application: &Application) -> Result<ReportMap> {
        let mut collected = ReportMap::new();

        let Some(summaries) = self.repository.fetch_reports(application).await? else {
            debug!(application = application.public_id(), "no reports");
            self.progress_reporter.report_error(&format!(
                " -- {} contributed no reports",
                application.public_id()
            ));
            return Ok(collected);
        };

        for summary in summaries {
            collected.insert(ReportRecord::new(
                application,
                summary.stage,
                summary.report_data_url,
            )?);
        }
        Ok(collected)
    }

    async fn extract_all_components(
        &self,
        reports: &mut ReportMap,
        request: &InventoryRequest,
    ) -> Result<ComponentRegistry> {
        self.progress_reporter
            .report("🔍 Fetching all components for reports...");

        let snapshot: Vec<ReportRecord> = reports.records().cloned().collect();
        let total = snapshot.len();
        let mut registry = ComponentRegistry::new();
        let mut pending = stream::iter(snapshot)
            .map(|record| self.fetch_report_components(record))
            .buffer_unordered(request.fan_out_width(total));

        let mut done = 0;
        while let Some(fetched) = pending.next().await {
            let (mut record, entries) = fetched?;
            Self::register_components(&mut registry, &mut record, entries);
            reports.insert(record);
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("Fetching components..."));
        }

        self.progress_reporter.report_completion(&format!(
            " -- {} total components found",
            registry.len()
        ));
        Ok(registry)
    }

    /// Component Extractor, fetch half: the component list of one report
    ///
    /// A report the server has nothing for contributes no components.
    async fn fetch_report_components(
        &self,
        record: ReportRecord,
    ) -> Result<(ReportRecord, Vec<ComponentEntry>)> {
        let Some(entries) = self
            .repository
            .fetch_report_components(record.report_url())
            .await?
        else {
            debug!(scan = %record.scan_id(), "no components");
            self.progress_reporter.report_error(&format!(
                " -- report {} of {} contributed no components",
                record.scan_id(),
                record.public_id()
            ));
            return Ok((record, Vec::new()));
        };
        Ok((record, entries))
    }

    /// Component Extractor, merge half: folds one report's components into
    /// the registry
    ///
    /// Entries without a hash are skipped. Every remaining entry attaches a
    /// usage for the report's application; a hash seen for the first time is
    /// also recorded on the report.
    fn register_components(
        registry: &mut ComponentRegistry,
        record: &mut ReportRecord,
        entries: Vec<ComponentEntry>,
    ) {
        for entry in entries {
            let Some(hash) = entry.hash else {
                continue;
            };
            let hash = ComponentHash::new(hash);
            let usage = Usage::new(record.stage(), record.public_id());

            if registry.record_sighting(hash.clone(), entry.package_url, entry.display_name, usage)
            {
                record.record_introduced(hash);
            }
        }
    }

    async fn resolve_all_labels(
        &self,
        registry: &mut ComponentRegistry,
        request: &InventoryRequest,
    ) -> Result<()> {
        self.progress_reporter
            .report("🏷️  Fetching labels for components (may take a while)...");

        let snapshot: Vec<Component> = registry.components().cloned().collect();
        let total = snapshot.len();
        let mut pending = stream::iter(snapshot)
            .map(|component| self.resolve_labels(component))
            .buffer_unordered(request.fan_out_width(total));

        let mut done = 0;
        while let Some(resolved) = pending.next().await {
            registry.insert(resolved?);
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("Fetching labels..."));
        }

        self.progress_reporter.report_completion(&format!(
            " -- labels resolved for {} usages",
            registry.usage_count()
        ));
        Ok(())
    }

    /// Label Resolver: appends the labels of every usage of one component
    ///
    /// The usages are looked up concurrently and matched back by position,
    /// so each usage receives its own labels in server order.
    async fn resolve_labels(&self, mut component: Component) -> Result<Component> {
        let lookups = component.usages().iter().map(|usage| {
            self.repository
                .fetch_labels(usage.application_public_id(), component.hash())
        });
        let resolved = future::try_join_all(lookups).await?;

        for (usage, labels) in component.usages_mut().iter_mut().zip(resolved) {
            if let Some(labels) = labels {
                usage.add_labels(labels);
            }
        }
        Ok(component)
    }

    fn filter_inventory(&self, registry: &mut ComponentRegistry) -> FilterSummary {
        self.progress_reporter
            .report("🧹 Reducing components to just those with labels...");

        let summary = InventoryFilter::retain_labeled(registry);

        self.progress_reporter.report(&format!(
            " -- dropped {} unlabeled usages and {} components without labels",
            summary.usages_removed, summary.components_removed
        ));
        self.progress_reporter.report_completion(&format!(
            " -- {} total components with labels",
            registry.len()
        ));
        summary
    }
}
