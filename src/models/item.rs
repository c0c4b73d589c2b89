use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Inventory partition that decides which selector an item feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carbohydrate,
    Fruit,
    Vegetable,
    Complement,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Protein,
        Category::Carbohydrate,
        Category::Fruit,
        Category::Vegetable,
        Category::Complement,
    ];

    /// Map the upstream `category_id` (1..=5) to a category.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Category::Protein),
            2 => Ok(Category::Carbohydrate),
            3 => Ok(Category::Fruit),
            4 => Ok(Category::Vegetable),
            5 => Ok(Category::Complement),
            other => Err(MenuError::UnknownCategory(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Category::Protein => 1,
            Category::Carbohydrate => 2,
            Category::Fruit => 3,
            Category::Vegetable => 4,
            Category::Complement => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Protein => "protein",
            Category::Carbohydrate => "carbohydrate",
            Category::Fruit => "fruit",
            Category::Vegetable => "vegetable",
            Category::Complement => "complement",
        };
        f.write_str(name)
    }
}

/// One of the three meals, processed strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Snack,
}

impl Meal {
    pub const ORDER: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Snack];

    /// Flag priority used to order the pool for this meal.
    pub fn priority(self) -> [Meal; 3] {
        match self {
            Meal::Breakfast => [Meal::Breakfast, Meal::Snack, Meal::Lunch],
            Meal::Lunch => [Meal::Lunch, Meal::Snack, Meal::Breakfast],
            Meal::Snack => [Meal::Snack, Meal::Lunch, Meal::Breakfast],
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Snack => "snack",
        };
        f.write_str(name)
    }
}

/// Meal-eligibility flags. Only used for ordering, never as a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealFlags {
    #[serde(default, alias = "desayuno")]
    pub breakfast: bool,

    #[serde(default, alias = "almuerzo")]
    pub lunch: bool,

    #[serde(default, alias = "merienda")]
    pub snack: bool,
}

impl MealFlags {
    pub fn get(&self, meal: Meal) -> bool {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Snack => self.snack,
        }
    }
}

/// Macro-nutrient field of a per-100g profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroField {
    Protein,
    Carbohydrate,
    Fat,
    Calories,
}

/// Per-100g macro profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    pub calories: f64,
}

impl MacroProfile {
    #[inline]
    pub fn get(&self, field: MacroField) -> f64 {
        match field {
            MacroField::Protein => self.protein,
            MacroField::Carbohydrate => self.carbohydrate,
            MacroField::Fat => self.fat,
            MacroField::Calories => self.calories,
        }
    }
}

/// Wire record as returned by the inventory source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: u64,

    pub name: String,

    pub available_g: f64,

    pub category_id: u8,

    #[serde(rename = "proteinPer100g")]
    pub protein_per_100g: f64,

    #[serde(rename = "carbohydratePer100g")]
    pub carbohydrate_per_100g: f64,

    #[serde(rename = "fatPer100g")]
    pub fat_per_100g: f64,

    #[serde(rename = "caloriesPer100g")]
    pub calories_per_100g: f64,

    #[serde(default)]
    pub flags: MealFlags,
}

/// A pantry item in the inventory snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub available_g: f64,
    pub per_100g: MacroProfile,
    pub flags: MealFlags,
}

impl Item {
    /// Macro value carried by `grams` of this item.
    #[inline]
    pub fn macro_for(&self, field: MacroField, grams: f64) -> f64 {
        grams * self.per_100g.get(field) / 100.0
    }

    /// Non-negative stock and macros.
    pub fn is_valid(&self) -> bool {
        self.available_g >= 0.0
            && self.per_100g.protein >= 0.0
            && self.per_100g.carbohydrate >= 0.0
            && self.per_100g.fat >= 0.0
            && self.per_100g.calories >= 0.0
    }
}

impl TryFrom<InventoryRecord> for Item {
    type Error = MenuError;

    fn try_from(record: InventoryRecord) -> Result<Self> {
        let item = Item {
            id: record.id,
            name: record.name,
            category: Category::from_id(record.category_id)?,
            available_g: record.available_g,
            per_100g: MacroProfile {
                protein: record.protein_per_100g,
                carbohydrate: record.carbohydrate_per_100g,
                fat: record.fat_per_100g,
                calories: record.calories_per_100g,
            },
            flags: record.flags,
        };

        if !item.is_valid() {
            return Err(MenuError::InvalidInput(format!(
                "item {} ({}) has negative stock or macros",
                item.id, item.name
            )));
        }

        Ok(item)
    }
}
