use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for inventory harvesting.
///
/// Everything not listed here (transport failures, JSON decode errors)
/// travels as a plain `anyhow::Error` with context attached.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid credentials: expected USER:PASSWORD\n\n💡 Hint: Pass credentials as --auth admin:admin123")]
    InvalidCredentials,

    #[error("Invalid server URL: {url}\nReason: {reason}\n\n💡 Hint: Specify the server root, e.g. http://localhost:8070")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Malformed report URL: {url}\nDetails: the scan id must be the second-to-last path segment")]
    MalformedReportUrl { url: String },

    #[error("Unexpected response from {url}\nDetails: {details}")]
    UnexpectedPayload { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}
