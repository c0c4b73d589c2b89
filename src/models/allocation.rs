use serde::{Deserialize, Serialize};

use crate::models::{Category, Item, MacroField, Meal, MealTarget};

/// Grams of one item assigned to a meal, with the macros they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: u64,
    pub name: String,
    pub grams: f64,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    pub calories: f64,
}

impl Allocation {
    /// Derive an allocation of `grams` from `item`.
    pub fn from_item(item: &Item, grams: f64) -> Self {
        let grams = grams.max(0.0);
        Self {
            id: item.id,
            name: item.name.clone(),
            grams,
            protein: item.macro_for(MacroField::Protein, grams),
            carbohydrate: item.macro_for(MacroField::Carbohydrate, grams),
            fat: item.macro_for(MacroField::Fat, grams),
            calories: item.macro_for(MacroField::Calories, grams),
        }
    }
}

/// Summed macros over a set of allocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub grams: f64,
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    pub calories: f64,
}

impl MacroTotals {
    pub fn add(&mut self, allocation: &Allocation) {
        self.grams += allocation.grams;
        self.protein += allocation.protein;
        self.carbohydrate += allocation.carbohydrate;
        self.fat += allocation.fat;
        self.calories += allocation.calories;
    }
}

impl<'a> FromIterator<&'a Allocation> for MacroTotals {
    fn from_iter<I: IntoIterator<Item = &'a Allocation>>(iter: I) -> Self {
        let mut totals = MacroTotals::default();
        for allocation in iter {
            totals.add(allocation);
        }
        totals
    }
}

/// Category-keyed allocations accumulated across all meals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub proteinas: Vec<Allocation>,
    pub carbohidratos: Vec<Allocation>,
    pub complementos: Vec<Allocation>,
    pub frutas: Vec<Allocation>,
    pub vegetales: Vec<Allocation>,
}

impl AllocationResult {
    pub fn category(&self, category: Category) -> &[Allocation] {
        match category {
            Category::Protein => &self.proteinas,
            Category::Carbohydrate => &self.carbohidratos,
            Category::Complement => &self.complementos,
            Category::Fruit => &self.frutas,
            Category::Vegetable => &self.vegetales,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut Vec<Allocation> {
        match category {
            Category::Protein => &mut self.proteinas,
            Category::Carbohydrate => &mut self.carbohidratos,
            Category::Complement => &mut self.complementos,
            Category::Fruit => &mut self.frutas,
            Category::Vegetable => &mut self.vegetales,
        }
    }

    /// Append a meal's selections for `category`.
    pub fn extend(&mut self, category: Category, allocations: Vec<Allocation>) {
        self.category_mut(category).extend(allocations);
    }

    /// Every allocation paired with its category, in result-key order.
    pub fn all(&self) -> impl Iterator<Item = (Category, &Allocation)> {
        [
            Category::Protein,
            Category::Carbohydrate,
            Category::Complement,
            Category::Fruit,
            Category::Vegetable,
        ]
        .into_iter()
        .flat_map(move |c| self.category(c).iter().map(move |a| (c, a)))
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.category(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn totals(&self) -> MacroTotals {
        self.all().map(|(_, a)| a).collect()
    }
}

/// Target vs. covered macros for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    pub meal: Meal,
    pub target: MealTarget,
    pub covered: MacroTotals,
    pub items: usize,
}

/// Allocator output: the result document plus per-meal summaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationReport {
    pub result: AllocationResult,
    pub meals: Vec<MealSummary>,
}
