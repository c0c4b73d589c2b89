use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::allocator::capped::fill_capped;
use crate::allocator::constants::*;
use crate::allocator::gap_fill::{Shortfall, fill_gap};
use crate::allocator::ordering::order_pool;
use crate::allocator::quota::{QuotaStrategy, select_quota};
use crate::error::Result;
use crate::models::{
    Allocation, AllocationReport, AllocationResult, Category, MacroField, MacroTotals, Meal,
    MealSummary, MealTarget, MealTargets,
};
use crate::state::{InventoryPool, InventoryProvider};

/// Count and weight caps for a filler category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerSpec {
    pub max_items: usize,
    pub ideal_weight_g: f64,
}

/// Tunables for a full allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatorConfig {
    pub quota_min_items: usize,
    pub quota_strategy: QuotaStrategy,
    pub complement_max_items: usize,
    pub complement_fallback_g: f64,
    pub fruit: FillerSpec,
    pub vegetable: FillerSpec,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            quota_min_items: QUOTA_MIN_ITEMS,
            quota_strategy: QuotaStrategy::default(),
            complement_max_items: COMPLEMENT_MAX_ITEMS,
            complement_fallback_g: COMPLEMENT_FALLBACK_G,
            fruit: FillerSpec {
                max_items: FRUIT_MAX_ITEMS,
                ideal_weight_g: FRUIT_IDEAL_G,
            },
            vegetable: FillerSpec {
                max_items: VEGETABLE_MAX_ITEMS,
                ideal_weight_g: VEGETABLE_IDEAL_G,
            },
        }
    }
}

impl AllocatorConfig {
    /// Filler category served with `meal`: fruit at breakfast, vegetables otherwise.
    pub fn filler_for(&self, meal: Meal) -> (Category, FillerSpec) {
        match meal {
            Meal::Breakfast => (Category::Fruit, self.fruit),
            Meal::Lunch | Meal::Snack => (Category::Vegetable, self.vegetable),
        }
    }
}

/// Selections made for one meal, in selector order.
#[derive(Debug, Clone)]
struct MealOutcome {
    selections: Vec<(Category, Vec<Allocation>)>,
    remaining: InventoryPool,
}

/// Runs breakfast, lunch and snack in order against one depleting pool.
pub struct MealAllocator<R: Rng = StdRng> {
    config: AllocatorConfig,
    rng: R,
}

impl MealAllocator<StdRng> {
    /// Reproducible tie-breaking.
    pub fn with_seed(config: AllocatorConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: AllocatorConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> MealAllocator<R> {
    pub fn new(config: AllocatorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Validate targets, fetch a snapshot from `provider`, then allocate.
    pub fn allocate_from<P: InventoryProvider + ?Sized>(
        &mut self,
        provider: &P,
        targets: &MealTargets,
    ) -> Result<AllocationReport> {
        targets.validate()?;
        let items = provider.fetch()?;
        Ok(self.allocate(InventoryPool::from_items(items), targets))
    }

    /// Allocate all three meals. Items consumed by one meal are gone for the next.
    pub fn allocate(&mut self, pool: InventoryPool, targets: &MealTargets) -> AllocationReport {
        info!(items = pool.len(), "allocating meals");

        let mut pool = pool;
        let mut result = AllocationResult::default();
        let mut meals = Vec::with_capacity(Meal::ORDER.len());

        for meal in Meal::ORDER {
            let target = targets.get(meal);
            let outcome = self.allocate_meal(meal, &pool, target);

            let covered: MacroTotals = outcome
                .selections
                .iter()
                .flat_map(|(_, allocations)| allocations.iter())
                .collect();
            let items: usize = outcome.selections.iter().map(|(_, a)| a.len()).sum();

            debug!(
                %meal,
                items,
                protein = covered.protein,
                carbohydrate = covered.carbohydrate,
                fat = covered.fat,
                calories = covered.calories,
                remaining = outcome.remaining.len(),
                "meal allocated"
            );

            meals.push(MealSummary {
                meal,
                target: *target,
                covered,
                items,
            });
            for (category, allocations) in outcome.selections {
                result.extend(category, allocations);
            }
            pool = outcome.remaining;
        }

        info!(allocations = result.len(), left = pool.len(), "allocation complete");
        AllocationReport { result, meals }
    }

    fn allocate_meal(&mut self, meal: Meal, pool: &InventoryPool, target: &MealTarget) -> MealOutcome {
        let ordered = order_pool(pool, &meal.priority(), &mut self.rng);

        let protein = select_quota(
            &ordered,
            Category::Protein,
            target.protein,
            MacroField::Protein,
            self.config.quota_min_items,
            self.config.quota_strategy,
        );
        let carbohydrate = select_quota(
            &protein.remaining,
            Category::Carbohydrate,
            target.carbohydrate,
            MacroField::Carbohydrate,
            self.config.quota_min_items,
            self.config.quota_strategy,
        );

        let covered: MacroTotals = protein
            .selected
            .iter()
            .chain(carbohydrate.selected.iter())
            .collect();
        let shortfall = Shortfall::between(target, &covered);
        debug!(%meal, fat = shortfall.fat, calories = shortfall.calories, "shortfall after quotas");

        let complement = fill_gap(
            &carbohydrate.remaining,
            Category::Complement,
            shortfall,
            self.config.complement_max_items,
            self.config.complement_fallback_g,
        );

        let (filler_category, filler) = self.config.filler_for(meal);
        let filled = fill_capped(
            &complement.remaining,
            filler_category,
            filler.max_items,
            filler.ideal_weight_g,
        );

        MealOutcome {
            remaining: filled.remaining,
            selections: vec![
                (Category::Protein, protein.selected),
                (Category::Carbohydrate, carbohydrate.selected),
                (Category::Complement, complement.selected),
                (filler_category, filled.selected),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::error::MenuError;
    use crate::models::{Item, MacroProfile, MealFlags};

    fn item(id: u64, category: Category, available_g: f64, per_100g: MacroProfile) -> Item {
        Item {
            id,
            name: format!("{category}-{id}"),
            category,
            available_g,
            per_100g,
            flags: MealFlags::default(),
        }
    }

    fn profile(protein: f64, carbohydrate: f64, fat: f64, calories: f64) -> MacroProfile {
        MacroProfile {
            protein,
            carbohydrate,
            fat,
            calories,
        }
    }

    fn targets() -> MealTargets {
        MealTargets {
            breakfast: MealTarget::new(500.0, 40.0, 60.0, 15.0),
            lunch: MealTarget::new(800.0, 50.0, 90.0, 25.0),
            snack: MealTarget::new(300.0, 15.0, 30.0, 10.0),
        }
    }

    #[test]
    fn test_single_protein_example() {
        let pool = InventoryPool::from_items(vec![item(
            1,
            Category::Protein,
            500.0,
            profile(20.0, 0.0, 5.0, 150.0),
        )]);
        let mut allocator = MealAllocator::with_seed(AllocatorConfig::default(), 1);
        let report = allocator.allocate(pool, &targets());

        assert_eq!(report.result.proteinas.len(), 1);
        assert!((report.result.proteinas[0].grams - 200.0).abs() < 1e-9);
        assert!((report.result.proteinas[0].protein - 40.0).abs() < 1e-9);
        assert_eq!(report.meals.len(), 3);
        assert_eq!(report.meals[1].items, 0);
    }

    #[test]
    fn test_fruit_at_breakfast_vegetables_later() {
        let mut items = Vec::new();
        for id in 1..=4 {
            items.push(item(id, Category::Fruit, 400.0, profile(1.0, 20.0, 0.2, 85.0)));
        }
        for id in 11..=20 {
            items.push(item(id, Category::Vegetable, 400.0, profile(2.0, 5.0, 0.1, 30.0)));
        }
        let pool = InventoryPool::from_items(items);
        let mut allocator = MealAllocator::with_seed(AllocatorConfig::default(), 3);
        let report = allocator.allocate(pool, &targets());

        assert_eq!(report.result.frutas.len(), 3);
        assert!(report.result.frutas.iter().all(|a| a.grams == 150.0));
        // Lunch and snack each take three distinct vegetables.
        assert_eq!(report.result.vegetales.len(), 6);
        assert!(report.result.vegetales.iter().all(|a| a.grams == 250.0));
    }

    #[test]
    fn test_filler_for_meal() {
        let config = AllocatorConfig::default();
        assert_eq!(config.filler_for(Meal::Breakfast).0, Category::Fruit);
        assert_eq!(config.filler_for(Meal::Lunch).0, Category::Vegetable);
        assert_eq!(config.filler_for(Meal::Snack).1.ideal_weight_g, 250.0);
    }

    /// Counts fetches and optionally fails them like an unreachable service.
    struct CountingProvider {
        calls: Cell<u32>,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl InventoryProvider for CountingProvider {
        fn fetch(&self) -> Result<Vec<Item>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(MenuError::Upstream {
                    status: Some(503),
                    reason: "down".to_string(),
                });
            }
            Ok(vec![item(1, Category::Protein, 500.0, profile(20.0, 0.0, 5.0, 130.0))])
        }
    }

    #[test]
    fn test_allocate_from_rejects_invalid_targets_before_fetch() {
        let mut bad = targets();
        bad.snack.calories = -1.0;
        let provider = CountingProvider::new(false);
        let mut allocator = MealAllocator::with_seed(AllocatorConfig::default(), 9);

        assert!(matches!(
            allocator.allocate_from(&provider, &bad),
            Err(MenuError::Validation(_))
        ));
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_allocate_from_passes_upstream_failure_through() {
        let provider = CountingProvider::new(true);
        let mut allocator = MealAllocator::with_seed(AllocatorConfig::default(), 9);

        match allocator.allocate_from(&provider, &targets()) {
            Err(MenuError::Upstream { status, reason }) => {
                assert_eq!(status, Some(503));
                assert_eq!(reason, "down");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_allocate_from_fetches_once_for_valid_targets() {
        let provider = CountingProvider::new(false);
        let mut allocator = MealAllocator::with_seed(AllocatorConfig::default(), 9);

        let report = allocator.allocate_from(&provider, &targets()).unwrap();
        assert_eq!(provider.calls.get(), 1);
        assert_eq!(report.result.proteinas.len(), 1);
        assert_eq!(report.meals.len(), 3);
    }
}
