// src/solver/bottom_up.rs

use crate::model::params::ModelParameters;
use crate::model::tables::{CostTable, PolicyTable};
use crate::strategy::cost::{immediate_cost, max_order};
use tracing::{debug, info};

/// Full tabulation of the ordering problem.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomUpSolution {
    pub costs: CostTable,
    pub policy: PolicyTable,
    initial_stock: u32,
}

impl BottomUpSolution {
    /// Optimal total cost from the initial state over the whole horizon.
    pub fn min_cost(&self) -> f64 {
        self.costs.get(1, self.initial_stock)
    }
}

/// Fills the cost and policy tables backwards from the last period.
///
/// Row `horizon + 1` stays at zero. Every stock level of every period gets a
/// decision, whether or not the initial state can reach it. Ties go to the
/// smallest order because only a strictly lower total replaces the incumbent.
pub fn solve(params: &ModelParameters) -> BottomUpSolution {
    let horizon = params.horizon();
    let capacity = params.capacity();
    let mut costs = CostTable::new(horizon, capacity);
    let mut policy = PolicyTable::new(horizon, capacity);

    for period in (1..=horizon).rev() {
        let demand = params.demand_at(period);

        for stock in 0..=capacity {
            let mut best_cost = f64::INFINITY;
            let mut best_order = 0;

            for order in 0..=max_order(stock, capacity) {
                let step = immediate_cost(stock, order, demand, params.costs(), capacity);
                let total = step.immediate_cost + costs.get(period + 1, step.next_stock);

                if total < best_cost {
                    best_cost = total;
                    best_order = order;
                }
            }

            costs.set(period, stock, best_cost);
            policy.record(period, stock, best_order);
        }

        debug!(period, demand, "tabulated period");
    }

    let solution = BottomUpSolution {
        costs,
        policy,
        initial_stock: params.initial_stock(),
    };
    info!(
        horizon,
        capacity,
        min_cost = solution.min_cost(),
        "bottom-up solve complete"
    );
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::params::CostParameters;

    fn params(horizon: usize, capacity: u32, initial: u32, demand: Vec<u32>) -> ModelParameters {
        let costs = CostParameters::new(10.0, 2.0, 1.0, 20.0).unwrap();
        ModelParameters::new(horizon, capacity, initial, demand, costs).unwrap()
    }

    #[test]
    fn single_period_orders_exact_demand() {
        let solution = solve(&params(1, 10, 0, vec![5]));
        assert_eq!(solution.min_cost(), 20.0);
        assert_eq!(solution.policy.decision(1, 0), Some(5));
    }

    #[test]
    fn boundary_row_is_zero() {
        let solution = solve(&params(3, 6, 2, vec![2, 4, 1]));
        assert!(solution.costs.row(4).iter().all(|&c| c == 0.0));
    }

    #[test]
    fn policy_covers_every_state() {
        let solution = solve(&params(3, 6, 2, vec![2, 4, 1]));
        assert!(solution.policy.is_complete());
        assert_eq!(solution.policy.visited(), 3 * 7);
    }

    #[test]
    fn decisions_stay_within_capacity() {
        let solution = solve(&params(4, 8, 0, vec![3, 7, 0, 5]));
        for period in 1..=4 {
            for stock in 0..=8 {
                let order = solution.policy.decision(period, stock).unwrap();
                assert!(order <= 8 - stock);
            }
        }
    }

    #[test]
    fn enough_stock_means_no_order() {
        // 5 units on hand cover both periods; ordering only adds cost.
        let solution = solve(&params(2, 5, 5, vec![2, 3]));
        assert_eq!(solution.policy.decision(1, 5), Some(0));
        assert_eq!(solution.min_cost(), 3.0);
    }

    #[test]
    fn batches_orders_when_fixed_cost_dominates() {
        let costs = CostParameters::new(100.0, 1.0, 1.0, 1000.0).unwrap();
        let params = ModelParameters::new(2, 10, 0, vec![2, 2], costs).unwrap();
        let solution = solve(&params);

        // One order of 4 (100 + 4 + 2 holding) beats two orders of 2 (2 * 102).
        assert_eq!(solution.policy.decision(1, 0), Some(4));
        assert_eq!(solution.policy.decision(2, 2), Some(0));
        assert_eq!(solution.min_cost(), 106.0);
    }

    #[test]
    fn ties_favour_the_smaller_order() {
        // Free everything: every order costs zero, so zero must win.
        let costs = CostParameters::new(0.0, 0.0, 0.0, 0.0).unwrap();
        let params = ModelParameters::new(2, 4, 0, vec![3, 1], costs).unwrap();
        let solution = solve(&params);
        for period in 1..=2 {
            for stock in 0..=4 {
                assert_eq!(solution.policy.decision(period, stock), Some(0));
            }
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        let p = params(3, 5, 1, vec![4, 0, 3]);
        assert_eq!(solve(&p), solve(&p));
    }
}
