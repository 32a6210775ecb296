// src/model/tables.rs

/// Minimum cost-to-go, indexed by period `1..=horizon + 1` and stock `0..=capacity`.
///
/// Row `horizon + 1` is the boundary and stays zero. Row 0 is never used; it
/// only keeps the 1-indexed periods addressable without offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    horizon: usize,
    width: usize,
    cells: Vec<f64>,
}

impl CostTable {
    pub fn new(horizon: usize, capacity: u32) -> Self {
        let width = capacity as usize + 1;
        Self {
            horizon,
            width,
            cells: vec![0.0; (horizon + 2) * width],
        }
    }

    pub fn capacity(&self) -> u32 {
        (self.width - 1) as u32
    }

    pub fn get(&self, period: usize, stock: u32) -> f64 {
        self.cells[self.index(period, stock)]
    }

    pub fn set(&mut self, period: usize, stock: u32, cost: f64) {
        let idx = self.index(period, stock);
        self.cells[idx] = cost;
    }

    /// Cost-to-go of every stock level for one period.
    pub fn row(&self, period: usize) -> &[f64] {
        let start = self.index(period, 0);
        &self.cells[start..start + self.width]
    }

    fn index(&self, period: usize, stock: u32) -> usize {
        assert!(period <= self.horizon + 1, "period {period} out of range");
        assert!((stock as usize) < self.width, "stock {stock} out of range");
        period * self.width + stock as usize
    }
}

/// Chosen order quantity per (period, stock).
///
/// Cells are `None` until a solver evaluates that state. The bottom-up solver
/// visits everything; the top-down solver leaves unreachable states `None`,
/// which keeps "never computed" apart from "optimal to order nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    horizon: usize,
    width: usize,
    cells: Vec<Option<u32>>,
}

impl PolicyTable {
    pub fn new(horizon: usize, capacity: u32) -> Self {
        let width = capacity as usize + 1;
        Self {
            horizon,
            width,
            cells: vec![None; (horizon + 1) * width],
        }
    }

    pub fn decision(&self, period: usize, stock: u32) -> Option<u32> {
        self.cells[self.index(period, stock)]
    }

    pub fn record(&mut self, period: usize, stock: u32, order: u32) {
        let idx = self.index(period, stock);
        self.cells[idx] = Some(order);
    }

    /// Number of states holding a decision.
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when every state of periods `1..=horizon` holds a decision.
    pub fn is_complete(&self) -> bool {
        self.cells[self.width..].iter().all(Option::is_some)
    }

    fn index(&self, period: usize, stock: u32) -> usize {
        assert!(
            (1..=self.horizon).contains(&period),
            "period {period} out of range"
        );
        assert!((stock as usize) < self.width, "stock {stock} out of range");
        period * self.width + stock as usize
    }
}
