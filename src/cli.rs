//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which evaluation of the recurrence to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Method {
    /// Run both solvers and fail if they disagree (default)
    #[default]
    Both,
    /// Backward tabulation over every state
    BottomUp,
    /// Memoized search from the initial state
    TopDown,
}

/// Optimal inventory ordering planner
#[derive(Parser, Debug)]
#[command(name = "inventory-dp", about = "Plan inventory orders by dynamic programming", version)]
pub struct Args {
    /// JSON file with horizon, capacity, demand and costs
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Solver to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: Method,

    /// Export the optimal trajectory to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Also price the naive and base-stock heuristics
    #[arg(long)]
    pub compare_heuristics: bool,

    /// Target level for the base-stock heuristic (defaults to the peak demand)
    #[arg(long)]
    pub base_stock: Option<u32>,
}
