use tracing::trace;

use crate::allocator::Selection;
use crate::allocator::constants::GAP_DIVISOR_FLOOR;
use crate::models::{Allocation, Category, MacroTotals, MealTarget};
use crate::state::InventoryPool;

/// Fat and calories still missing after the quota selections.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Shortfall {
    pub fat: f64,
    pub calories: f64,
}

impl Shortfall {
    /// `max(0, target - covered)` for fat and calories.
    pub fn between(target: &MealTarget, covered: &MacroTotals) -> Self {
        Self {
            fat: (target.fat - covered.fat).max(0.0),
            calories: (target.calories - covered.calories).max(0.0),
        }
    }
}

/// Cover the fat/calorie shortfall with up to `max_items` items of `category`.
///
/// Each item is sized to cover the larger of the two gaps on its own. When
/// both gaps are already met every item gets `fallback_g` instead, so a
/// complement is always served if one exists. Per-100g divisors are floored
/// at 1 and zero-gram items are skipped.
pub fn fill_gap(
    pool: &InventoryPool,
    category: Category,
    shortfall: Shortfall,
    max_items: usize,
    fallback_g: f64,
) -> Selection {
    let mut selected: Vec<Allocation> = Vec::new();

    for item in pool.of_category(category) {
        if selected.len() >= max_items {
            break;
        }

        let grams_for_calories =
            shortfall.calories * 100.0 / item.per_100g.calories.max(GAP_DIVISOR_FLOOR);
        let grams_for_fat = shortfall.fat * 100.0 / item.per_100g.fat.max(GAP_DIVISOR_FLOOR);
        let required = grams_for_calories.max(grams_for_fat);

        let grams = if required > 0.0 {
            required.min(item.available_g)
        } else {
            fallback_g.min(item.available_g)
        };

        if grams <= 0.0 {
            trace!(id = item.id, "complement has no stock, skipped");
            continue;
        }

        trace!(id = item.id, grams, "gap pick");
        selected.push(Allocation::from_item(item, grams));
    }

    Selection::from_pool(pool, selected)
}
