// src/simulation/config.rs

use crate::error::ConfigError;
use crate::io::demand;
use crate::model::params::{CostParameters, ModelParameters};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw planner configuration as read from JSON.
///
/// Nothing here is trusted yet; [`PlannerConfig::to_parameters`] is the
/// validation boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlannerConfig {
    pub horizon: usize,
    pub capacity: u32,
    pub initial_stock: u32,
    pub demand: DemandConfig,
    pub costs: CostConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Either an explicit schedule or a profile expanded to `horizon` periods.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DemandConfig {
    /// Signed so that negative entries reach validation instead of failing to parse.
    Explicit(Vec<i64>),
    Profile(DemandProfile),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum DemandProfile {
    Constant {
        value: u32,
    },
    Step {
        before: u32,
        after: u32,
        step_period: usize,
    },
    Normal {
        mean: f64,
        std_dev: f64,
        #[serde(default)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CostConfig {
    pub fixed_order_cost: f64,
    pub unit_purchase_cost: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SolverConfig {
    /// Frame budget for the top-down search; unbounded when absent.
    #[serde(default)]
    pub depth_limit: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            capacity: 10,
            initial_stock: 0,
            demand: DemandConfig::Explicit(vec![3, 5, 2, 4, 6, 1]),
            costs: CostConfig {
                fixed_order_cost: 10.0,
                unit_purchase_cost: 2.0,
                holding_cost: 1.0,
                shortage_cost: 20.0,
            },
            solver: SolverConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Expands the demand and builds validated [`ModelParameters`].
    pub fn to_parameters(&self) -> Result<ModelParameters, ConfigError> {
        let demand = self.demand_schedule()?;
        let costs = CostParameters::new(
            self.costs.fixed_order_cost,
            self.costs.unit_purchase_cost,
            self.costs.holding_cost,
            self.costs.shortage_cost,
        )?;

        ModelParameters::new(
            self.horizon,
            self.capacity,
            self.initial_stock,
            demand,
            costs,
        )
    }

    fn demand_schedule(&self) -> Result<Vec<u32>, ConfigError> {
        match &self.demand {
            DemandConfig::Explicit(values) => values
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let period = i + 1;
                    if value < 0 {
                        Err(ConfigError::NegativeDemand { period, value })
                    } else {
                        u32::try_from(value).map_err(|_| ConfigError::DemandTooLarge { period, value })
                    }
                })
                .collect(),
            DemandConfig::Profile(DemandProfile::Constant { value }) => {
                Ok(demand::generate_constant_demand(self.horizon, *value))
            }
            DemandConfig::Profile(DemandProfile::Step {
                before,
                after,
                step_period,
            }) => Ok(demand::generate_step_demand(
                self.horizon,
                *before,
                *after,
                *step_period,
            )),
            DemandConfig::Profile(DemandProfile::Normal {
                mean,
                std_dev,
                seed,
            }) => demand::generate_normal_demand(self.horizon, *mean, *std_dev, *seed),
        }
    }
}

/// Reads and parses a JSON config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<PlannerConfig, ConfigError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config");
    PlannerConfig::from_json(&json)
}
