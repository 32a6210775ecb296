// src/strategy/cost.rs

//! One-period cost model.
//!
//! Every solver, the trajectory walker and heuristic evaluation go through
//! [`immediate_cost`], so they all agree on what a decision costs and where
//! it leads.

use crate::model::params::CostParameters;

/// Outcome of serving one period after ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// `order_cost + shortage_cost + holding_cost`.
    pub immediate_cost: f64,
    /// Stock carried into the next period, always within `0..=capacity`.
    pub next_stock: u32,
    pub order_cost: f64,
    /// Units of demand left unserved (lost, never carried as negative stock).
    pub shortage: u32,
    pub shortage_cost: f64,
    pub holding_cost: f64,
}

/// Applies an order of `order` units to `stock`, serves `demand` and prices the result.
///
/// # Formula
/// - order cost = K + c * x when x > 0, otherwise 0
/// - shortage = max(0, d - (s + x))
/// - next stock = clamp(s + x - d, 0, capacity)
/// - holding cost = h * next stock
pub fn immediate_cost(
    stock: u32,
    order: u32,
    demand: u32,
    costs: &CostParameters,
    capacity: u32,
) -> Transition {
    // No order, no fixed charge.
    let order_cost = if order > 0 {
        costs.fixed_order_cost + costs.unit_purchase_cost * order as f64
    } else {
        0.0
    };

    let available = stock as u64 + order as u64;
    let demand = demand as u64;

    let shortage = demand.saturating_sub(available);
    let shortage_cost = costs.shortage_cost * shortage as f64;

    // The upper clamp only bites if a caller orders past capacity.
    let next_stock = available.saturating_sub(demand).min(capacity as u64) as u32;
    let holding_cost = costs.holding_cost * next_stock as f64;

    Transition {
        immediate_cost: order_cost + shortage_cost + holding_cost,
        next_stock,
        order_cost,
        shortage: shortage.min(u32::MAX as u64) as u32,
        shortage_cost,
        holding_cost,
    }
}

/// Largest order that keeps `stock + order` within capacity.
pub fn max_order(stock: u32, capacity: u32) -> u32 {
    capacity.saturating_sub(stock)
}
