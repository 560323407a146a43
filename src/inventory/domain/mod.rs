pub mod application;
pub mod component;
pub mod registry;
pub mod report;

pub use application::Application;
pub use component::{Component, ComponentHash, Usage};
pub use registry::ComponentRegistry;
pub use report::{ReportMap, ReportRecord, ScanId};
