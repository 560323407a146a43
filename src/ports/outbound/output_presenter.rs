use crate::shared::Result;

/// OutputPresenter port for persisting the formatted inventory
pub trait OutputPresenter {
    /// Presents the formatted inventory at the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
