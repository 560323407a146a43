/// Use cases module containing application business logic orchestration
mod harvest_inventory;

pub use harvest_inventory::HarvestInventoryUseCase;
