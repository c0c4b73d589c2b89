use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::targets::RangeLevel;

/// PantryMenu — allocate pantry stock to breakfast, lunch and snack macro targets.
#[derive(Parser, Debug)]
#[command(name = "pantry_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the inventory JSON file.
    #[arg(short, long, global = true, default_value = "inventory.json")]
    pub inventory: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Allocate inventory to the three meals.
    Allocate {
        /// Targets JSON file; prompted interactively when omitted.
        #[arg(short, long)]
        targets: Option<PathBuf>,

        /// Seed for reproducible tie-breaking between equally flagged items.
        #[arg(long)]
        seed: Option<u64>,

        /// Size quota picks against the remaining requirement instead of the full target.
        #[arg(long)]
        residual_quota: bool,

        /// Write the result document as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write one CSV row per allocation.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Skip the terminal table.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Derive per-meal targets from daily ranges and a meal distribution.
    Split {
        /// Nutritional ranges JSON file, one entry per objective.
        #[arg(long)]
        ranges: PathBuf,

        /// Objective id to split; optional when the file lists only one.
        #[arg(long)]
        objective: Option<u32>,

        /// Meal distribution JSON file; 30/45/25 when omitted.
        #[arg(long)]
        distribution: Option<PathBuf>,

        /// Range column to use.
        #[arg(long, value_enum, default_value_t = RangeLevel::Moderate)]
        level: RangeLevel,

        /// Output targets JSON file.
        #[arg(short, long, default_value = "targets.json")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Allocate {
            targets: None,
            seed: None,
            residual_quota: false,
            json: None,
            csv: None,
            quiet: false,
        }
    }
}
