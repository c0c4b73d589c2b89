//! Per-meal targets derived from daily nutritional ranges.
//!
//! The ranges file lists dietary objectives by id. Each objective carries a
//! minimum, moderate and maximum value per macro. Picking one level gives a
//! daily target, which a calorie distribution then splits across breakfast,
//! lunch and snack.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::{Meal, MealTarget, MealTargets};

/// Which column of a nutritional range to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RangeLevel {
    Minimum,
    #[default]
    Moderate,
    Maximum,
}

/// Daily range for one macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    #[serde(alias = "valor_minimo")]
    pub minimum: f64,

    #[serde(alias = "valor_moderado")]
    pub moderate: f64,

    #[serde(alias = "valor_maximo")]
    pub maximum: f64,
}

impl MacroRange {
    pub fn pick(&self, level: RangeLevel) -> f64 {
        match level {
            RangeLevel::Minimum => self.minimum,
            RangeLevel::Moderate => self.moderate,
            RangeLevel::Maximum => self.maximum,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        let ordered = self.minimum <= self.moderate && self.moderate <= self.maximum;
        let sane = [self.minimum, self.moderate, self.maximum]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !sane || !ordered {
            return Err(MenuError::Validation(format!(
                "{name} range must satisfy 0 <= minimum <= moderate <= maximum"
            )));
        }
        Ok(())
    }
}

/// Daily ranges for every macro of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionalRanges {
    #[serde(alias = "calorias")]
    pub calories: MacroRange,

    #[serde(alias = "proteinas")]
    pub protein: MacroRange,

    #[serde(alias = "carbohidratos")]
    pub carbohydrate: MacroRange,

    #[serde(alias = "grasas")]
    pub fat: MacroRange,
}

impl NutritionalRanges {
    pub fn validate(&self) -> Result<()> {
        self.calories.validate("calories")?;
        self.protein.validate("protein")?;
        self.carbohydrate.validate("carbohydrate")?;
        self.fat.validate("fat")
    }

    /// Daily target at `level`.
    pub fn pick(&self, level: RangeLevel) -> MealTarget {
        MealTarget::new(
            self.calories.pick(level),
            self.protein.pick(level),
            self.carbohydrate.pick(level),
            self.fat.pick(level),
        )
    }
}

/// A dietary objective and its daily ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(alias = "objetivo_id")]
    pub id: u32,

    #[serde(default, alias = "nombre")]
    pub name: String,

    #[serde(alias = "rangos")]
    pub ranges: NutritionalRanges,
}

/// Find the objective to split. `None` is accepted only when there is exactly one.
pub fn select_objective(objectives: &[Objective], id: Option<u32>) -> Result<&Objective> {
    match (id, objectives) {
        (Some(id), _) => objectives.iter().find(|o| o.id == id).ok_or_else(|| {
            MenuError::Validation(format!(
                "unknown objective {id}; available: {}",
                objective_ids(objectives)
            ))
        }),
        (None, [only]) => Ok(only),
        (None, _) => Err(MenuError::Validation(format!(
            "ranges file holds {} objectives; pick one of {} with --objective",
            objectives.len(),
            objective_ids(objectives)
        ))),
    }
}

fn objective_ids(objectives: &[Objective]) -> String {
    objectives
        .iter()
        .map(|o| o.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Relative share of the day's intake per meal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealDistribution {
    #[serde(alias = "desayuno")]
    pub breakfast: f64,

    #[serde(alias = "almuerzo")]
    pub lunch: f64,

    #[serde(alias = "merienda")]
    pub snack: f64,
}

impl Default for MealDistribution {
    fn default() -> Self {
        Self {
            breakfast: 0.30,
            lunch: 0.45,
            snack: 0.25,
        }
    }
}

impl MealDistribution {
    pub fn share(&self, meal: Meal) -> f64 {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Snack => self.snack,
        }
    }

    fn total(&self) -> f64 {
        self.breakfast + self.lunch + self.snack
    }

    pub fn validate(&self) -> Result<()> {
        for meal in Meal::ORDER {
            let share = self.share(meal);
            if !share.is_finite() || share < 0.0 {
                return Err(MenuError::Validation(format!(
                    "{meal} share must be a non-negative number, got {share}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(MenuError::Validation(
                "meal shares must add up to more than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Split a daily target across meals. Shares are normalized by their sum,
    /// so percentages and fractions both work.
    pub fn split(&self, daily: &MealTarget) -> Result<MealTargets> {
        self.validate()?;
        let total = self.total();

        let mut targets = MealTargets::default();
        for meal in Meal::ORDER {
            *targets.get_mut(meal) = daily.scaled(self.share(meal) / total);
        }
        Ok(targets)
    }
}

/// Load every objective from a JSON ranges file.
pub fn load_objectives<P: AsRef<Path>>(path: P) -> Result<Vec<Objective>> {
    let content = fs::read_to_string(path)?;
    let objectives: Vec<Objective> =
        serde_json::from_str(&content).map_err(|e| MenuError::Validation(e.to_string()))?;

    if objectives.is_empty() {
        return Err(MenuError::Validation(
            "ranges file lists no objectives".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for objective in &objectives {
        if !seen.insert(objective.id) {
            return Err(MenuError::Validation(format!(
                "objective {} is listed twice",
                objective.id
            )));
        }
        objective.ranges.validate()?;
    }
    Ok(objectives)
}

/// Load the objective `id` from a JSON ranges file.
pub fn load_ranges<P: AsRef<Path>>(path: P, id: Option<u32>) -> Result<Objective> {
    let objectives = load_objectives(path)?;
    let objective = select_objective(&objectives, id)?.clone();
    Ok(objective)
}

/// Load a meal distribution from a JSON file.
pub fn load_distribution<P: AsRef<Path>>(path: P) -> Result<MealDistribution> {
    let content = fs::read_to_string(path)?;
    let distribution: MealDistribution =
        serde_json::from_str(&content).map_err(|e| MenuError::Validation(e.to_string()))?;
    distribution.validate()?;
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges() -> NutritionalRanges {
        NutritionalRanges {
            calories: MacroRange {
                minimum: 1600.0,
                moderate: 2000.0,
                maximum: 2400.0,
            },
            protein: MacroRange {
                minimum: 80.0,
                moderate: 100.0,
                maximum: 140.0,
            },
            carbohydrate: MacroRange {
                minimum: 180.0,
                moderate: 240.0,
                maximum: 300.0,
            },
            fat: MacroRange {
                minimum: 45.0,
                moderate: 60.0,
                maximum: 80.0,
            },
        }
    }

    #[test]
    fn test_pick_level() {
        let daily = ranges().pick(RangeLevel::Maximum);
        assert_eq!(daily.calories, 2400.0);
        assert_eq!(daily.protein, 140.0);
        assert_eq!(ranges().pick(RangeLevel::default()).fat, 60.0);
    }

    #[test]
    fn test_unordered_range_rejected() {
        let mut bad = ranges();
        bad.fat.minimum = 90.0;
        assert!(matches!(bad.validate(), Err(MenuError::Validation(_))));
    }

    #[test]
    fn test_split_normalizes_percentages() {
        let distribution = MealDistribution {
            breakfast: 25.0,
            lunch: 50.0,
            snack: 25.0,
        };
        let daily = MealTarget::new(2000.0, 100.0, 240.0, 60.0);
        let targets = distribution.split(&daily).unwrap();

        assert!((targets.breakfast.calories - 500.0).abs() < 1e-9);
        assert!((targets.lunch.protein - 50.0).abs() < 1e-9);
        assert!((targets.snack.fat - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distribution_rejected() {
        let distribution = MealDistribution {
            breakfast: 0.0,
            lunch: 0.0,
            snack: 0.0,
        };
        assert!(distribution.split(&MealTarget::default()).is_err());
    }

    fn objective(id: u32, name: &str) -> Objective {
        Objective {
            id,
            name: name.to_string(),
            ranges: ranges(),
        }
    }

    #[test]
    fn test_select_objective_by_id() {
        let objectives = vec![objective(1, "Cut"), objective(2, "Bulk")];
        assert_eq!(select_objective(&objectives, Some(2)).unwrap().name, "Bulk");
    }

    #[test]
    fn test_select_unknown_objective_rejected() {
        let objectives = vec![objective(1, "Cut"), objective(2, "Bulk")];
        match select_objective(&objectives, Some(7)) {
            Err(MenuError::Validation(msg)) => assert!(msg.contains("1, 2")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_objective_required_when_several() {
        let single = vec![objective(4, "Maintain")];
        assert_eq!(select_objective(&single, None).unwrap().id, 4);

        let several = vec![objective(1, "Cut"), objective(2, "Bulk")];
        assert!(matches!(
            select_objective(&several, None),
            Err(MenuError::Validation(_))
        ));
    }

    #[test]
    fn test_objective_accepts_spanish_keys() {
        let json = r#"{
            "objetivo_id": 3,
            "nombre": "Mantener",
            "rangos": {
                "calorias": {"valor_minimo": 1500, "valor_moderado": 1800, "valor_maximo": 2100},
                "proteinas": {"valor_minimo": 70, "valor_moderado": 90, "valor_maximo": 110},
                "carbohidratos": {"valor_minimo": 150, "valor_moderado": 200, "valor_maximo": 250},
                "grasas": {"valor_minimo": 40, "valor_moderado": 55, "valor_maximo": 70}
            }
        }"#;
        let objective: Objective = serde_json::from_str(json).unwrap();
        assert_eq!(objective.id, 3);
        assert_eq!(objective.ranges.pick(RangeLevel::Maximum).fat, 70.0);
    }

    #[test]
    fn test_ranges_accept_spanish_column_names() {
        let json = r#"{
            "calorias": {"valor_minimo": 1500, "valor_moderado": 1800, "valor_maximo": 2100},
            "proteinas": {"valor_minimo": 70, "valor_moderado": 90, "valor_maximo": 110},
            "carbohidratos": {"valor_minimo": 150, "valor_moderado": 200, "valor_maximo": 250},
            "grasas": {"valor_minimo": 40, "valor_moderado": 55, "valor_maximo": 70}
        }"#;
        let ranges: NutritionalRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.pick(RangeLevel::Minimum).protein, 70.0);
    }
}
