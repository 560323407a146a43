mod inventory_filter;

pub use inventory_filter::{FilterSummary, InventoryFilter};
