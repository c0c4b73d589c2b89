use crate::models::{AllocationReport, Allocation, Category, MealSummary};

fn display_category(title: &str, allocations: &[Allocation], width: usize) {
    if allocations.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("{} ({} items)", title, allocations.len());
    for allocation in allocations {
        println!(
            "  {:<width$} {:>7.1} g | P {:>6.1} C {:>6.1} F {:>6.1} | {:>6.0} kcal",
            allocation.name,
            allocation.grams,
            allocation.protein,
            allocation.carbohydrate,
            allocation.fat,
            allocation.calories,
            width = width
        );
    }
}

fn display_meal_summary(summary: &MealSummary) {
    println!(
        "  {:<10} {:>2} items | P {:>6.1}/{:<6.1} C {:>6.1}/{:<6.1} F {:>5.1}/{:<5.1} | {:>5.0}/{:<5.0} kcal",
        summary.meal.to_string(),
        summary.items,
        summary.covered.protein,
        summary.target.protein,
        summary.covered.carbohydrate,
        summary.target.carbohydrate,
        summary.covered.fat,
        summary.target.fat,
        summary.covered.calories,
        summary.target.calories,
    );
}

/// Display the allocation grouped by category, then per-meal coverage.
pub fn display_report(report: &AllocationReport) {
    let result = &report.result;
    if result.is_empty() {
        println!("Nothing allocated (empty inventory or nothing matched).");
        return;
    }

    println!();
    println!("=== Pantry Allocation ===");
    println!();

    let width = result.all().map(|(_, a)| a.name.len()).max().unwrap_or(10);

    for (title, category) in [
        ("Protein", Category::Protein),
        ("Carbohydrate", Category::Carbohydrate),
        ("Complement", Category::Complement),
        ("Fruit", Category::Fruit),
        ("Vegetable", Category::Vegetable),
    ] {
        display_category(title, result.category(category), width);
    }

    println!();
    println!("--- Coverage (covered/target) ---");
    for summary in &report.meals {
        display_meal_summary(summary);
    }

    let totals = result.totals();
    println!();
    println!("Total items: {}", result.len());
    println!("Total grams: {:.0}", totals.grams);
    println!("Total calories: {:.0}", totals.calories);
    println!();
}
