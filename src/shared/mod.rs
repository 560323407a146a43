/// Shared utilities - error types, result alias, file-system guards
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
