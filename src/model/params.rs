// src/model/params.rs

use crate::error::ConfigError;

/// Cost coefficients of the ordering problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParameters {
    /// Charged once per period in which an order is placed.
    pub fixed_order_cost: f64,
    pub unit_purchase_cost: f64,
    /// Per unit carried into the next period.
    pub holding_cost: f64,
    /// Per unit of demand that could not be served.
    pub shortage_cost: f64,
}

impl CostParameters {
    pub fn new(
        fixed_order_cost: f64,
        unit_purchase_cost: f64,
        holding_cost: f64,
        shortage_cost: f64,
    ) -> Result<Self, ConfigError> {
        let named = [
            ("fixed_order_cost", fixed_order_cost),
            ("unit_purchase_cost", unit_purchase_cost),
            ("holding_cost", holding_cost),
            ("shortage_cost", shortage_cost),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCost { name, value });
            }
        }

        Ok(Self {
            fixed_order_cost,
            unit_purchase_cost,
            holding_cost,
            shortage_cost,
        })
    }
}

/// A fully validated planning problem.
///
/// The only way to obtain one is [`ModelParameters::new`], so every value the
/// solvers see already satisfies: `horizon >= 1`, one demand per period and
/// `initial_stock <= capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    horizon: usize,
    capacity: u32,
    initial_stock: u32,
    demand: Vec<u32>,
    costs: CostParameters,
}

impl ModelParameters {
    pub fn new(
        horizon: usize,
        capacity: u32,
        initial_stock: u32,
        demand: Vec<u32>,
        costs: CostParameters,
    ) -> Result<Self, ConfigError> {
        if horizon == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        if demand.len() != horizon {
            return Err(ConfigError::DemandLengthMismatch {
                horizon,
                demands: demand.len(),
            });
        }
        if initial_stock > capacity {
            return Err(ConfigError::InitialStockExceedsCapacity {
                initial_stock,
                capacity,
            });
        }

        Ok(Self {
            horizon,
            capacity,
            initial_stock,
            demand,
            costs,
        })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn initial_stock(&self) -> u32 {
        self.initial_stock
    }

    pub fn costs(&self) -> &CostParameters {
        &self.costs
    }

    pub fn demand(&self) -> &[u32] {
        &self.demand
    }

    /// Demand of a 1-indexed period.
    ///
    /// # Panics
    /// If `period` is outside `1..=horizon`.
    pub fn demand_at(&self, period: usize) -> u32 {
        self.demand[period - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> CostParameters {
        CostParameters::new(10.0, 2.0, 1.0, 20.0).unwrap()
    }

    #[test]
    fn accepts_consistent_parameters() {
        let params = ModelParameters::new(3, 10, 4, vec![1, 2, 3], costs()).unwrap();
        assert_eq!(params.horizon(), 3);
        assert_eq!(params.demand_at(1), 1);
        assert_eq!(params.demand_at(3), 3);
    }

    #[test]
    fn rejects_zero_horizon() {
        let err = ModelParameters::new(0, 10, 0, vec![], costs()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHorizon));
    }

    #[test]
    fn rejects_demand_length_mismatch() {
        let err = ModelParameters::new(3, 10, 0, vec![1, 2], costs()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DemandLengthMismatch {
                horizon: 3,
                demands: 2
            }
        ));
    }

    #[test]
    fn rejects_initial_stock_above_capacity() {
        let err = ModelParameters::new(1, 5, 6, vec![1], costs()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InitialStockExceedsCapacity {
                initial_stock: 6,
                capacity: 5
            }
        ));
    }

    #[test]
    fn zero_capacity_is_allowed() {
        assert!(ModelParameters::new(2, 0, 0, vec![3, 0], costs()).is_ok());
    }

    #[test]
    fn rejects_negative_or_non_finite_costs() {
        let err = CostParameters::new(10.0, -1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCost {
                name: "unit_purchase_cost",
                ..
            }
        ));

        let err = CostParameters::new(10.0, 1.0, f64::NAN, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCost {
                name: "holding_cost",
                ..
            }
        ));

        assert!(CostParameters::new(0.0, 0.0, 0.0, f64::INFINITY).is_err());
    }
}
