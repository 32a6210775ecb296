// src/simulation/engine.rs

use crate::error::SolveError;
use crate::model::params::ModelParameters;
use crate::model::tables::{CostTable, PolicyTable};
use crate::strategy::cost::{immediate_cost, max_order, Transition};
use crate::strategy::implementations::TablePolicy;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use serde::Serialize;
use tracing::debug;

/// One row of a realized trajectory; serializes straight to a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRecord {
    pub period: usize,
    pub start_stock: u32,
    pub demand: u32,
    pub order: u32,
    pub shortage: u32,
    pub period_cost: f64,
    pub end_stock: u32,
}

/// The realized path of one policy from the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub label: String,
    pub records: Vec<PeriodRecord>,
}

impl Trajectory {
    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.period_cost).sum()
    }

    /// Number of periods in which an order was placed.
    pub fn order_count(&self) -> usize {
        self.records.iter().filter(|r| r.order > 0).count()
    }
}

/// Walks a solved policy table forward, pricing each period from the
/// bottom-up cost table as `cost[t][s_t] - cost[t + 1][s_(t+1)]`.
///
/// Works with either solver's policy: the top-down table always holds a
/// decision for the states on this path, since the path starts at the
/// initial state.
pub fn trace_with_table(
    label: impl Into<String>,
    params: &ModelParameters,
    policy: &PolicyTable,
    costs: &CostTable,
) -> Result<Trajectory, SolveError> {
    let mut table_policy = TablePolicy::new(policy);
    walk(label.into(), params, &mut table_policy, |record, _| {
        costs.get(record.period, record.start_stock) - costs.get(record.period + 1, record.end_stock)
    })
}

/// Runs any policy forward, pricing each period directly with the cost model.
///
/// Orders beyond the free capacity are cut back to it.
pub fn simulate_policy(
    label: impl Into<String>,
    params: &ModelParameters,
    policy: &mut dyn OrderPolicy,
) -> Result<Trajectory, SolveError> {
    walk(label.into(), params, policy, |_, step| step.immediate_cost)
}

fn walk(
    label: String,
    params: &ModelParameters,
    policy: &mut dyn OrderPolicy,
    price: impl Fn(&PeriodRecord, &Transition) -> f64,
) -> Result<Trajectory, SolveError> {
    let capacity = params.capacity();
    let mut stock = params.initial_stock();
    let mut records = Vec::with_capacity(params.horizon());

    for period in 1..=params.horizon() {
        let demand = params.demand_at(period);
        let context = OrderContext {
            period,
            inventory: stock,
            demand,
            capacity,
        };

        let order = policy
            .calculate_order(&context)
            .ok_or(SolveError::MissingDecision { period, stock })?
            .min(max_order(stock, capacity));

        let step = immediate_cost(stock, order, demand, params.costs(), capacity);
        let mut record = PeriodRecord {
            period,
            start_stock: stock,
            demand,
            order,
            shortage: step.shortage,
            period_cost: 0.0,
            end_stock: step.next_stock,
        };
        record.period_cost = price(&record, &step);

        debug!(label = %label, period, stock, order, cost = record.period_cost, "period");
        stock = step.next_stock;
        records.push(record);
    }

    Ok(Trajectory { label, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::params::CostParameters;
    use crate::solver::{bottom_up, top_down};
    use crate::strategy::implementations::{BaseStockPolicy, NaivePolicy};

    fn params() -> ModelParameters {
        let costs = CostParameters::new(10.0, 2.0, 1.0, 20.0).unwrap();
        ModelParameters::new(4, 10, 1, vec![3, 5, 2, 4], costs).unwrap()
    }

    #[test]
    fn table_trace_totals_the_optimum() {
        let p = params();
        let solution = bottom_up::solve(&p);
        let trajectory = trace_with_table("bottom-up", &p, &solution.policy, &solution.costs).unwrap();

        assert_eq!(trajectory.records.len(), 4);
        assert!((trajectory.total_cost() - solution.min_cost()).abs() < 1e-9);
        assert_eq!(trajectory.records[0].start_stock, 1);
        for pair in trajectory.records.windows(2) {
            assert_eq!(pair[0].end_stock, pair[1].start_stock);
        }
    }

    #[test]
    fn table_costs_match_the_cost_model_on_the_path() {
        let p = params();
        let solution = bottom_up::solve(&p);
        let traced = trace_with_table("t", &p, &solution.policy, &solution.costs).unwrap();
        let simulated =
            simulate_policy("s", &p, &mut TablePolicy::new(&solution.policy)).unwrap();

        for (a, b) in traced.records.iter().zip(&simulated.records) {
            assert_eq!(a.order, b.order);
            assert!((a.period_cost - b.period_cost).abs() < 1e-9);
        }
    }

    #[test]
    fn top_down_policy_follows_the_same_path() {
        let p = params();
        let bu = bottom_up::solve(&p);
        let td = top_down::solve(&p, None).unwrap();

        let a = trace_with_table("bu", &p, &bu.policy, &bu.costs).unwrap();
        let b = trace_with_table("td", &p, &td.policy, &bu.costs).unwrap();
        assert!((a.total_cost() - b.total_cost()).abs() < 1e-9);
    }

    #[test]
    fn unvisited_state_is_an_error() {
        let p = params();
        let empty = PolicyTable::new(4, 10);
        let err = simulate_policy("empty", &p, &mut TablePolicy::new(&empty)).unwrap_err();
        assert_eq!(err, SolveError::MissingDecision { period: 1, stock: 1 });
    }

    #[test]
    fn heuristics_never_beat_the_optimum() {
        let p = params();
        let optimum = bottom_up::solve(&p).min_cost();

        let naive = simulate_policy("naive", &p, &mut NaivePolicy::new()).unwrap();
        let base = simulate_policy("base", &p, &mut BaseStockPolicy::new(6)).unwrap();

        assert!(naive.total_cost() >= optimum - 1e-9);
        assert!(base.total_cost() >= optimum - 1e-9);
    }

    #[test]
    fn oversized_orders_are_clamped() {
        let p = params();
        let trajectory = simulate_policy("greedy", &p, &mut BaseStockPolicy::new(50)).unwrap();
        for r in &trajectory.records {
            assert!(r.start_stock + r.order <= 10);
            assert!(r.end_stock <= 10);
        }
    }
}
