/// Result alias used across the crate; errors are `anyhow::Error` so stage
/// failures can carry context all the way up to `main`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
