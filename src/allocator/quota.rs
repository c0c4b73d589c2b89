use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::allocator::Selection;
use crate::allocator::constants::MACRO_EPSILON;
use crate::models::{Allocation, Category, MacroField};
use crate::state::InventoryPool;

/// What each candidate's grams are sized against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaStrategy {
    /// Size every candidate against the full requirement. Once several items
    /// are picked the combined contribution can overshoot the target.
    #[default]
    OriginalTarget,

    /// Size every candidate against what is still missing.
    Residual,
}

/// Greedily cover `required` of `field` from items of `category`.
///
/// Candidates are taken in pool order until the accumulated contribution
/// reaches `required` and at least `min_items` have been picked. Items with
/// no `field` content are skipped and stay in the pool.
pub fn select_quota(
    pool: &InventoryPool,
    category: Category,
    required: f64,
    field: MacroField,
    min_items: usize,
    strategy: QuotaStrategy,
) -> Selection {
    let mut accumulated = 0.0;
    let mut selected: Vec<Allocation> = Vec::new();

    for item in pool.of_category(category) {
        if accumulated + MACRO_EPSILON >= required && selected.len() >= min_items {
            break;
        }

        let per_100g = item.per_100g.get(field);
        if per_100g <= 0.0 {
            debug!(id = item.id, name = %item.name, ?field, "skipping item with no macro content");
            continue;
        }

        let basis = match strategy {
            QuotaStrategy::OriginalTarget => required,
            QuotaStrategy::Residual => (required - accumulated).max(0.0),
        };
        let grams_needed = basis * 100.0 / per_100g;
        let grams = item.available_g.min(grams_needed);

        let allocation = Allocation::from_item(item, grams);
        accumulated += item.macro_for(field, allocation.grams);
        trace!(id = item.id, grams = allocation.grams, accumulated, "quota pick");
        selected.push(allocation);
    }

    Selection::from_pool(pool, selected)
}
