use std::collections::HashSet;

use crate::models::{Allocation, Category, Item};

/// Per-request inventory snapshot.
///
/// Never mutated in place: every selector receives a borrowed pool and
/// hands back a new one with the consumed ids removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryPool {
    items: Vec<Item>,
}

impl InventoryPool {
    /// Build a pool from fetched items, keeping the first occurrence of each id.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of `category`, in pool order.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// New pool without the given ids, preserving order.
    pub fn without(&self, ids: &HashSet<u64>) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| !ids.contains(&item.id))
                .cloned()
                .collect(),
        }
    }

    /// New pool without the items referenced by `selection`.
    pub fn without_selected(&self, selection: &[Allocation]) -> Self {
        let ids: HashSet<u64> = selection.iter().map(|a| a.id).collect();
        self.without(&ids)
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroProfile, MealFlags};

    fn item(id: u64, category: Category) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            category,
            available_g: 100.0,
            per_100g: MacroProfile::default(),
            flags: MealFlags::default(),
        }
    }

    #[test]
    fn test_from_items_dedupes_ids() {
        let pool = InventoryPool::from_items(vec![
            item(1, Category::Protein),
            item(1, Category::Fruit),
            item(2, Category::Fruit),
        ]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(1).unwrap().category, Category::Protein);
    }

    #[test]
    fn test_without_keeps_order_and_source() {
        let pool = InventoryPool::from_items(vec![
            item(1, Category::Protein),
            item(2, Category::Fruit),
            item(3, Category::Protein),
        ]);
        let ids: HashSet<u64> = [2].into_iter().collect();
        let remaining = pool.without(&ids);

        let remaining_ids: Vec<u64> = remaining.items().iter().map(|i| i.id).collect();
        assert_eq!(remaining_ids, vec![1, 3]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_of_category() {
        let pool = InventoryPool::from_items(vec![
            item(1, Category::Protein),
            item(2, Category::Fruit),
            item(3, Category::Protein),
        ]);
        assert_eq!(pool.of_category(Category::Protein).count(), 2);
        assert_eq!(pool.of_category(Category::Vegetable).count(), 0);
    }
}
