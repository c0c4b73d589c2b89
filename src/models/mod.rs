mod allocation;
mod item;
mod target;

pub use allocation::{Allocation, AllocationReport, AllocationResult, MacroTotals, MealSummary};
pub use item::{Category, InventoryRecord, Item, MacroField, MacroProfile, Meal, MealFlags};
pub use target::{MealTarget, MealTargets};
