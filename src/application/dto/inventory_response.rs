use crate::inventory::domain::{ComponentRegistry, ReportMap};
use crate::inventory::services::FilterSummary;

/// InventoryResponse - Internal response DTO from the harvest use case
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    /// Number of applications listed by the server
    pub application_count: usize,
    /// Every collected report, with the hashes each one introduced
    pub reports: ReportMap,
    /// Distinct components seen before filtering
    pub components_found: usize,
    /// What the label filter removed
    pub filter_summary: FilterSummary,
    /// Components with at least one labeled usage, keeping only those usages
    pub inventory: ComponentRegistry,
}
