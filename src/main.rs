use std::path::Path;

use clap::Parser;
use tracing::info;

use pantry_menu_rs::allocator::{AllocatorConfig, MealAllocator, QuotaStrategy};
use pantry_menu_rs::cli::{Cli, Command};
use pantry_menu_rs::error::Result;
use pantry_menu_rs::interface::{collect_meal_targets, display_report};
use pantry_menu_rs::logging::init_logging;
use pantry_menu_rs::models::AllocationReport;
use pantry_menu_rs::state::{
    JsonFileProvider, load_targets, save_result_json, save_targets, write_result_csv,
};
use pantry_menu_rs::targets::{MealDistribution, RangeLevel, load_distribution, load_ranges};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Allocate {
            targets,
            seed,
            residual_quota,
            json,
            csv,
            quiet,
        } => cmd_allocate(
            &cli.inventory,
            targets.as_deref(),
            seed,
            residual_quota,
            json.as_deref(),
            csv.as_deref(),
            quiet,
        ),
        Command::Split {
            ranges,
            objective,
            distribution,
            level,
            out,
        } => cmd_split(&ranges, objective, distribution.as_deref(), level, &out),
    }
}

/// Allocate the inventory snapshot to breakfast, lunch and snack.
fn cmd_allocate(
    inventory: &Path,
    targets_path: Option<&Path>,
    seed: Option<u64>,
    residual_quota: bool,
    json: Option<&Path>,
    csv: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    // Targets are validated before the inventory is touched.
    let targets = match targets_path {
        Some(path) => load_targets(path)?,
        None => collect_meal_targets()?,
    };

    let config = AllocatorConfig {
        quota_strategy: if residual_quota {
            QuotaStrategy::Residual
        } else {
            QuotaStrategy::OriginalTarget
        },
        ..AllocatorConfig::default()
    };

    let provider = JsonFileProvider::new(inventory);
    let report: AllocationReport = match seed {
        Some(seed) => MealAllocator::with_seed(config, seed).allocate_from(&provider, &targets)?,
        None => MealAllocator::from_entropy(config).allocate_from(&provider, &targets)?,
    };

    if !quiet {
        display_report(&report);
    }

    if let Some(path) = json {
        save_result_json(path, &report.result)?;
        info!(path = %path.display(), "wrote result json");
    }

    if let Some(path) = csv {
        write_result_csv(path, &report.result)?;
        info!(path = %path.display(), "wrote result csv");
    }

    if quiet && json.is_none() && csv.is_none() {
        println!("{}", serde_json::to_string_pretty(&report.result)?);
    }

    Ok(())
}

/// Write a per-meal targets file from daily ranges.
fn cmd_split(
    ranges_path: &Path,
    objective_id: Option<u32>,
    distribution_path: Option<&Path>,
    level: RangeLevel,
    out: &Path,
) -> Result<()> {
    let objective = load_ranges(ranges_path, objective_id)?;
    info!(id = objective.id, name = %objective.name, "objective selected");
    let distribution = match distribution_path {
        Some(path) => load_distribution(path)?,
        None => MealDistribution::default(),
    };

    let daily = objective.ranges.pick(level);
    let targets = distribution.split(&daily)?;
    save_targets(out, &targets)?;

    println!(
        "Wrote {:?} targets for objective {} ({:.0} kcal/day) to {}",
        level,
        objective.id,
        daily.calories,
        out.display()
    );
    Ok(())
}
