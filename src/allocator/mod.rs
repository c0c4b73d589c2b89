pub mod capped;
pub mod constants;
pub mod gap_fill;
pub mod meal;
pub mod ordering;
pub mod quota;

use crate::models::Allocation;
use crate::state::InventoryPool;

pub use capped::fill_capped;
pub use constants::*;
pub use gap_fill::{Shortfall, fill_gap};
pub use meal::{AllocatorConfig, FillerSpec, MealAllocator};
pub use ordering::order_pool;
pub use quota::{QuotaStrategy, select_quota};

/// Output of a selector: what it picked and the pool left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub selected: Vec<Allocation>,
    pub remaining: InventoryPool,
}

impl Selection {
    /// Pair `selected` with `pool` minus the selected ids.
    pub fn from_pool(pool: &InventoryPool, selected: Vec<Allocation>) -> Self {
        let remaining = pool.without_selected(&selected);
        Self {
            selected,
            remaining,
        }
    }
}
