/// Data Transfer Objects for application layer
///
/// DTOs carry run options into the use case and the harvested inventory
/// back out to the CLI.
mod inventory_request;
mod inventory_response;

pub use inventory_request::InventoryRequest;
pub use inventory_response::InventoryResponse;
