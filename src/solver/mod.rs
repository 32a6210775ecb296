// src/solver/mod.rs

//! The two evaluations of the ordering recurrence and their cross-check.

pub mod bottom_up;
pub mod top_down;

use crate::error::SolveError;
use crate::model::params::ModelParameters;
use bottom_up::BottomUpSolution;
use top_down::TopDownSolution;
use tracing::{error, info};

/// Largest absolute difference tolerated between the two minimum costs.
pub const COST_TOLERANCE: f64 = 1e-6;

/// Both solutions for the same parameters, already checked against each other.
#[derive(Debug, Clone)]
pub struct CrossValidation {
    pub bottom_up: BottomUpSolution,
    pub top_down: TopDownSolution,
}

impl CrossValidation {
    pub fn min_cost(&self) -> f64 {
        self.bottom_up.min_cost()
    }
}

/// Runs both solvers and fails if their optimal costs disagree.
pub fn cross_validate(
    params: &ModelParameters,
    depth_limit: Option<usize>,
) -> Result<CrossValidation, SolveError> {
    let bottom_up = bottom_up::solve(params);
    let top_down = top_down::solve(params, depth_limit)?;

    check_agreement(bottom_up.min_cost(), top_down.min_cost)?;
    info!(min_cost = bottom_up.min_cost(), "solvers agree");

    Ok(CrossValidation {
        bottom_up,
        top_down,
    })
}

/// Compares two optimal costs within [`COST_TOLERANCE`].
pub fn check_agreement(bottom_up: f64, top_down: f64) -> Result<(), SolveError> {
    // Identical results agree even when both overflowed to infinity.
    if bottom_up == top_down || (bottom_up - top_down).abs() < COST_TOLERANCE {
        Ok(())
    } else {
        error!(bottom_up, top_down, "solvers disagree");
        Err(SolveError::ResultMismatch {
            bottom_up,
            top_down,
        })
    }
}
