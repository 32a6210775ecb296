// src/strategy/implementations.rs

use crate::model::tables::PolicyTable;
use crate::strategy::traits::{OrderContext, OrderPolicy};

// =========================================================================
// 1. Table Policy (Optimal)
// =========================================================================

/// Replays the decisions stored in a solved policy table.
#[derive(Debug, Clone)]
pub struct TablePolicy<'a> {
    table: &'a PolicyTable,
}

impl<'a> TablePolicy<'a> {
    pub fn new(table: &'a PolicyTable) -> Self {
        Self { table }
    }
}

impl OrderPolicy for TablePolicy<'_> {
    fn calculate_order(&mut self, context: &OrderContext) -> Option<u32> {
        self.table.decision(context.period, context.inventory)
    }
}

// =========================================================================
// 2. Naive Policy (Lot-for-Lot)
// =========================================================================

/// Orders just enough to cover the current period's demand.
/// Ignores fixed costs entirely, so it places an order almost every period.
#[derive(Debug, Clone, Default)]
pub struct NaivePolicy;

impl NaivePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OrderPolicy for NaivePolicy {
    fn calculate_order(&mut self, context: &OrderContext) -> Option<u32> {
        Some(context.demand.saturating_sub(context.inventory))
    }
}

// =========================================================================
// 3. Base Stock Policy (Order-Up-To)
// =========================================================================

/// Tops inventory up to a fixed target level every period.
///
/// If we are already at or above target, we order 0.
#[derive(Debug, Clone)]
pub struct BaseStockPolicy {
    target_stock: u32,
}

impl BaseStockPolicy {
    pub fn new(target_stock: u32) -> Self {
        Self { target_stock }
    }
}

impl OrderPolicy for BaseStockPolicy {
    fn calculate_order(&mut self, context: &OrderContext) -> Option<u32> {
        Some(self.target_stock.saturating_sub(context.inventory))
    }
}
