use dialoguer::Input;

use crate::error::{MenuError, Result};
use crate::models::{Meal, MealTarget, MealTargets};

/// Parse a non-negative amount typed by the user.
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(MenuError::InvalidInput(
            "Amount must be zero or positive".to_string(),
        ));
    }

    Ok(value)
}

fn prompt_amount(prompt: String, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{default}"))
        .interact_text()?;

    parse_amount(&input)
}

/// Prompt for the four macro targets of one meal.
pub fn prompt_meal_target(meal: Meal, defaults: &MealTarget) -> Result<MealTarget> {
    println!("--- {meal} ---");
    Ok(MealTarget {
        calories: prompt_amount(format!("{meal} calories (kcal)"), defaults.calories)?,
        protein: prompt_amount(format!("{meal} protein (g)"), defaults.protein)?,
        carbohydrate: prompt_amount(
            format!("{meal} carbohydrate (g)"),
            defaults.carbohydrate,
        )?,
        fat: prompt_amount(format!("{meal} fat (g)"), defaults.fat)?,
    })
}

/// Collect targets for all three meals interactively.
pub fn collect_meal_targets() -> Result<MealTargets> {
    let defaults = MealTargets {
        breakfast: MealTarget::new(500.0, 30.0, 60.0, 15.0),
        lunch: MealTarget::new(800.0, 45.0, 90.0, 25.0),
        snack: MealTarget::new(300.0, 15.0, 35.0, 10.0),
    };

    let mut targets = MealTargets::default();
    for meal in Meal::ORDER {
        *targets.get_mut(meal) = prompt_meal_target(meal, defaults.get(meal))?;
    }

    targets.validate()?;
    Ok(targets)
}
