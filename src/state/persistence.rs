use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{AllocationResult, MealTargets};

/// Load and validate per-meal targets from a JSON file.
pub fn load_targets<P: AsRef<Path>>(path: P) -> Result<MealTargets> {
    let content = fs::read_to_string(path)?;
    MealTargets::from_json(&content)
}

/// Save per-meal targets to a JSON file.
pub fn save_targets<P: AsRef<Path>>(path: P, targets: &MealTargets) -> Result<()> {
    let json = serde_json::to_string_pretty(targets)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save the category-keyed result document.
pub fn save_result_json<P: AsRef<Path>>(path: P, result: &AllocationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write one CSV row per allocation.
pub fn write_result_csv<P: AsRef<Path>>(path: P, result: &AllocationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "category",
        "id",
        "name",
        "grams",
        "protein",
        "carbohydrate",
        "fat",
        "calories",
    ])?;

    for (category, allocation) in result.all() {
        wtr.write_record([
            category.to_string(),
            allocation.id.to_string(),
            allocation.name.clone(),
            format!("{:.1}", allocation.grams),
            format!("{:.2}", allocation.protein),
            format!("{:.2}", allocation.carbohydrate),
            format!("{:.2}", allocation.fat),
            format!("{:.1}", allocation.calories),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
