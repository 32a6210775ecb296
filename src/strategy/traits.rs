// src/strategy/traits.rs

use std::fmt::Debug;

/// What a policy sees when it decides an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderContext {
    /// 1-indexed period.
    pub period: usize,
    /// Stock on hand at the start of the period.
    pub inventory: u32,
    /// Known demand of this period.
    pub demand: u32,
    pub capacity: u32,
}

/// Decides how much to order at the start of a period.
pub trait OrderPolicy: Debug {
    /// Returns the order quantity, or `None` when the policy has no decision
    /// for this state (e.g. a top-down table that never visited it).
    ///
    /// Callers clamp the result to `0..=capacity - inventory`.
    fn calculate_order(&mut self, context: &OrderContext) -> Option<u32>;
}
