use std::num::NonZeroUsize;

/// InventoryRequest - Internal request DTO for the harvest use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryRequest {
    /// Maximum requests in flight per stage; `None` sends every request of a
    /// stage at once
    pub concurrency: Option<NonZeroUsize>,
}

impl InventoryRequest {
    pub fn new(concurrency: Option<NonZeroUsize>) -> Self {
        Self { concurrency }
    }

    /// Number of units of work to keep in flight for a stage of `items` items
    pub fn fan_out_width(&self, items: usize) -> usize {
        self.concurrency
            .map(NonZeroUsize::get)
            .unwrap_or(items)
            .max(1)
    }
}
