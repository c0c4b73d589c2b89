/// Minimum items the protein and carbohydrate quotas pick per meal.
pub const QUOTA_MIN_ITEMS: usize = 3;

/// Tolerance when comparing an accumulated macro against its requirement.
pub const MACRO_EPSILON: f64 = 1e-9;

/// Maximum complement items per meal.
pub const COMPLEMENT_MAX_ITEMS: usize = 5;

/// Complement grams used when the fat and calorie shortfalls are already met.
pub const COMPLEMENT_FALLBACK_G: f64 = 250.0;

/// Divisor floor for the gap filler's per-100g fat and calorie values.
pub const GAP_DIVISOR_FLOOR: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Capped fillers
// ─────────────────────────────────────────────────────────────────────────────

/// Fruit items per breakfast.
pub const FRUIT_MAX_ITEMS: usize = 3;

/// Grams per fruit item.
pub const FRUIT_IDEAL_G: f64 = 150.0;

/// Vegetable items per lunch and snack.
pub const VEGETABLE_MAX_ITEMS: usize = 3;

/// Grams per vegetable item.
pub const VEGETABLE_IDEAL_G: f64 = 250.0;
