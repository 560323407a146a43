/// Inventory layer - Pure domain models and services
///
/// Nothing in this module performs I/O; the pipeline stages in the
/// application layer feed it data fetched through the outbound ports.
pub mod domain;
pub mod services;
