pub mod allocator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;
pub mod targets;

pub use allocator::{AllocatorConfig, MealAllocator, QuotaStrategy};
pub use error::{MenuError, Result};
pub use models::{Allocation, AllocationResult, Item, MealTargets};
pub use state::InventoryPool;
