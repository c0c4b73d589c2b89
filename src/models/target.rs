use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::Meal;

/// Macro targets for a single meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTarget {
    #[serde(alias = "calorias")]
    pub calories: f64,

    #[serde(alias = "proteinas")]
    pub protein: f64,

    #[serde(alias = "carbohidratos")]
    pub carbohydrate: f64,

    #[serde(alias = "grasas")]
    pub fat: f64,
}

impl MealTarget {
    pub fn new(calories: f64, protein: f64, carbohydrate: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbohydrate,
            fat,
        }
    }

    /// Scale every field by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbohydrate: self.carbohydrate * factor,
            fat: self.fat * factor,
        }
    }

    fn validate(&self, meal: Meal) -> Result<()> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrate", self.carbohydrate),
            ("fat", self.fat),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(MenuError::Validation(format!(
                    "{meal}.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Targets for the three meals of a request. Every meal is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTargets {
    #[serde(alias = "desayuno")]
    pub breakfast: MealTarget,

    #[serde(alias = "almuerzo")]
    pub lunch: MealTarget,

    #[serde(alias = "merienda")]
    pub snack: MealTarget,
}

impl MealTargets {
    pub fn get(&self, meal: Meal) -> &MealTarget {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Snack => &self.snack,
        }
    }

    pub fn get_mut(&mut self, meal: Meal) -> &mut MealTarget {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Snack => &mut self.snack,
        }
    }

    /// Reject negative or non-finite targets.
    pub fn validate(&self) -> Result<()> {
        for meal in Meal::ORDER {
            self.get(meal).validate(meal)?;
        }
        Ok(())
    }

    /// Parse and validate a targets document. Missing meals or fields are
    /// validation failures.
    pub fn from_json(json: &str) -> Result<Self> {
        let targets: MealTargets =
            serde_json::from_str(json).map_err(|e| MenuError::Validation(e.to_string()))?;
        targets.validate()?;
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_english_keys() {
        let json = r#"{
            "breakfast": {"calories": 500, "protein": 30, "carbohydrate": 60, "fat": 15},
            "lunch": {"calories": 800, "protein": 45, "carbohydrate": 90, "fat": 25},
            "snack": {"calories": 300, "protein": 15, "carbohydrate": 35, "fat": 10}
        }"#;
        let targets = MealTargets::from_json(json).unwrap();
        assert_eq!(targets.lunch.protein, 45.0);
        assert_eq!(targets.get(Meal::Snack).fat, 10.0);
    }

    #[test]
    fn test_from_json_accepts_spanish_keys() {
        let json = r#"{
            "desayuno": {"calorias": 500, "proteinas": 30, "carbohidratos": 60, "grasas": 15},
            "almuerzo": {"calorias": 800, "proteinas": 45, "carbohidratos": 90, "grasas": 25},
            "merienda": {"calorias": 300, "proteinas": 15, "carbohidratos": 35, "grasas": 10}
        }"#;
        let targets = MealTargets::from_json(json).unwrap();
        assert_eq!(targets.breakfast.carbohydrate, 60.0);
    }

    #[test]
    fn test_missing_meal_is_validation_error() {
        let json = r#"{
            "breakfast": {"calories": 500, "protein": 30, "carbohydrate": 60, "fat": 15},
            "lunch": {"calories": 800, "protein": 45, "carbohydrate": 90, "fat": 25}
        }"#;
        assert!(matches!(
            MealTargets::from_json(json),
            Err(MenuError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let json = r#"{
            "breakfast": {"calories": 500, "protein": 30, "carbohydrate": 60},
            "lunch": {"calories": 800, "protein": 45, "carbohydrate": 90, "fat": 25},
            "snack": {"calories": 300, "protein": 15, "carbohydrate": 35, "fat": 10}
        }"#;
        assert!(matches!(
            MealTargets::from_json(json),
            Err(MenuError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_target_rejected() {
        let mut targets = MealTargets::default();
        targets.lunch.fat = -2.0;
        let err = targets.validate().unwrap_err();
        assert!(err.to_string().contains("lunch.fat"));
    }
}
