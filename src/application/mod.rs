/// Application layer - Use cases and DTOs
///
/// This layer drives the harvest pipeline, coordinating the domain with the
/// server, console and file system through ports.
pub mod dto;
pub mod use_cases;
