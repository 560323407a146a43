/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the pipeline uses to reach the
/// server, the console, and the file system.
pub mod formatter;
pub mod iq_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::InventoryFormatter;
pub use iq_repository::{ComponentEntry, IqRepository, ReportSummary};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
