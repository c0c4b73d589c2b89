use crate::allocator::Selection;
use crate::models::{Allocation, Category};
use crate::state::InventoryPool;

/// Take the first `max_items` items of `category`, `ideal_weight_g` each
/// (less if stock is short). No macro target is involved.
pub fn fill_capped(
    pool: &InventoryPool,
    category: Category,
    max_items: usize,
    ideal_weight_g: f64,
) -> Selection {
    let selected: Vec<Allocation> = pool
        .of_category(category)
        .take(max_items)
        .map(|item| Allocation::from_item(item, item.available_g.min(ideal_weight_g)))
        .collect();

    Selection::from_pool(pool, selected)
}
