use crate::inventory::domain::ComponentRegistry;
use crate::shared::Result;

/// InventoryFormatter port for rendering the final inventory
pub trait InventoryFormatter {
    /// Formats the filtered component registry
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, registry: &ComponentRegistry) -> Result<String>;
}
