/// Mock implementations for testing
mod mock_iq_repository;
mod mock_progress_reporter;

pub use mock_iq_repository::MockIqRepository;
pub use mock_progress_reporter::MockProgressReporter;
