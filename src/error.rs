// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Problems detected while loading or validating planner input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("horizon must be at least 1 period")]
    EmptyHorizon,

    #[error("demand has {demands} entries but the horizon is {horizon} periods")]
    DemandLengthMismatch { horizon: usize, demands: usize },

    #[error("initial stock {initial_stock} exceeds capacity {capacity}")]
    InitialStockExceedsCapacity { initial_stock: u32, capacity: u32 },

    #[error("demand for period {period} is negative ({value})")]
    NegativeDemand { period: usize, value: i64 },

    #[error("demand for period {period} is too large ({value})")]
    DemandTooLarge { period: usize, value: i64 },

    #[error("cost '{name}' must be finite and non-negative, got {value}")]
    InvalidCost { name: &'static str, value: f64 },

    #[error("invalid demand profile: {0}")]
    InvalidDemandProfile(String),
}

/// Failures raised by the solvers or while walking a solved policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("top-down search needs more than {depth_limit} frames for a {horizon}-period horizon")]
    RecursionDepthExceeded { horizon: usize, depth_limit: usize },

    #[error("solvers disagree: bottom-up {bottom_up:.6}, top-down {top_down:.6}")]
    ResultMismatch { bottom_up: f64, top_down: f64 },

    #[error("no decision recorded for period {period}, stock {stock}")]
    MissingDecision { period: usize, stock: u32 },
}

/// Failures while exporting a trajectory.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
