use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Item, Meal};
use crate::state::InventoryPool;

/// Sort key for an item under a flag priority. `false` sorts first, so
/// each flag is negated to put eligible items ahead.
fn priority_key(item: &Item, priority: &[Meal; 3]) -> [bool; 3] {
    priority.map(|meal| !item.flags.get(meal))
}

/// Reorder a copy of the pool by meal-flag priority.
///
/// The copy is shuffled with `rng` first and then stably sorted, so items
/// with identical flags end up in a uniformly random relative order that
/// is reproducible for a seeded `rng`.
pub fn order_pool<R: Rng + ?Sized>(
    pool: &InventoryPool,
    priority: &[Meal; 3],
    rng: &mut R,
) -> InventoryPool {
    let mut items: Vec<Item> = pool.items().to_vec();
    items.shuffle(rng);
    items.sort_by_key(|item| priority_key(item, priority));
    InventoryPool::from_items(items)
}
