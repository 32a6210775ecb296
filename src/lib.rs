//! Optimal multi-period inventory ordering by dynamic programming.
//!
//! The planner picks, for every period and stock level, the order quantity
//! that minimizes ordering, holding and shortage costs to the end of the
//! horizon. Two evaluations of the same recurrence are provided:
//! [`solver::bottom_up`] tabulates every state backwards in time, and
//! [`solver::top_down`] searches only the states reachable from the initial
//! stock. [`solver::cross_validate`] runs both and insists they agree.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod solver;
pub mod strategy;

pub use error::{ConfigError, ReportError, SolveError};
pub use model::params::{CostParameters, ModelParameters};
pub use model::tables::{CostTable, PolicyTable};
pub use solver::{cross_validate, CrossValidation, COST_TOLERANCE};
