//! iq-label-inventory - labeled component export for IQ servers
//!
//! This library walks every application report on an IQ server, collects the
//! distinct components those reports contain, looks up the labels applied to
//! each component within each application, and keeps only the components that
//! carry at least one label. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Reports, components, usages and the label filter
//! - **Application Layer** (`application`): The harvest use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, console progress, JSON output
//! - **Config** (`config`): YAML config file and settings resolution
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use iq_label_inventory::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let credentials: BasicCredentials = "admin:admin123".parse()?;
//! let repository = IqServerClient::new("http://localhost:8070", credentials)?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = HarvestInventoryUseCase::new(repository, progress_reporter);
//! let response = use_case.execute(InventoryRequest::default()).await?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&response.inventory)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::network::{BasicCredentials, IqServerClient};
    pub use crate::application::dto::{InventoryRequest, InventoryResponse};
    pub use crate::application::use_cases::HarvestInventoryUseCase;
    pub use crate::inventory::domain::{
        Application, Component, ComponentHash, ComponentRegistry, ReportMap, ReportRecord, ScanId,
        Usage,
    };
    pub use crate::inventory::services::{FilterSummary, InventoryFilter};
    pub use crate::ports::outbound::{
        ComponentEntry, InventoryFormatter, IqRepository, OutputPresenter, ProgressReporter,
        ReportSummary,
    };
    pub use crate::shared::Result;
}
