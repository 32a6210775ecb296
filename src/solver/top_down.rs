// src/solver/top_down.rs

use crate::error::SolveError;
use crate::model::params::ModelParameters;
use crate::model::tables::PolicyTable;
use crate::strategy::cost::{immediate_cost, max_order};
use std::collections::HashMap;
use tracing::{debug, info};

/// Result of a memoized search from the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct TopDownSolution {
    pub min_cost: f64,
    /// Only states reachable from the initial state hold a decision.
    pub policy: PolicyTable,
    /// Distinct (period, stock) states that were evaluated.
    pub states_evaluated: usize,
}

/// One pending evaluation of `min_cost(period, stock)`.
///
/// `next_order` is the decision currently being priced. It is not advanced
/// until the future cost of its successor is in the memo.
#[derive(Debug)]
struct Frame {
    period: usize,
    stock: u32,
    next_order: u32,
    best_cost: f64,
    best_order: u32,
}

impl Frame {
    fn new(period: usize, stock: u32) -> Self {
        Self {
            period,
            stock,
            next_order: 0,
            best_cost: f64::INFINITY,
            best_order: 0,
        }
    }
}

enum Step {
    /// All decisions priced; the frame's result is final.
    Finish,
    /// The successor state has to be evaluated first.
    Descend(usize, u32),
    /// The decision was priced from the memo; move to the next one.
    Advance,
}

/// Memoized top-down search.
///
/// The recursion `min_cost(t, s) = min_x { c(s, x) + min_cost(t + 1, s') }` is
/// driven by an explicit frame stack, one frame per period, so the native call
/// stack never grows with the horizon. `depth_limit` caps the number of live
/// frames for callers that want to bound the search.
#[derive(Debug)]
pub struct TopDownSolver<'a> {
    params: &'a ModelParameters,
    depth_limit: Option<usize>,
}

impl<'a> TopDownSolver<'a> {
    pub fn new(params: &'a ModelParameters) -> Self {
        Self {
            params,
            depth_limit: None,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<usize>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn solve(&self) -> Result<TopDownSolution, SolveError> {
        let params = self.params;
        let horizon = params.horizon();
        let capacity = params.capacity();

        let mut memo: HashMap<(usize, u32), f64> = HashMap::new();
        let mut policy = PolicyTable::new(horizon, capacity);
        let mut stack: Vec<Frame> = Vec::with_capacity(horizon);

        self.push(&mut stack, Frame::new(1, params.initial_stock()))?;

        while let Some(frame) = stack.last_mut() {
            let step = if frame.next_order > max_order(frame.stock, capacity) {
                Step::Finish
            } else {
                let transition = immediate_cost(
                    frame.stock,
                    frame.next_order,
                    params.demand_at(frame.period),
                    params.costs(),
                    capacity,
                );
                let next_period = frame.period + 1;

                let future = if next_period > horizon {
                    Some(0.0)
                } else {
                    memo.get(&(next_period, transition.next_stock)).copied()
                };

                match future {
                    Some(future) => {
                        let total = transition.immediate_cost + future;
                        if total < frame.best_cost {
                            frame.best_cost = total;
                            frame.best_order = frame.next_order;
                        }
                        Step::Advance
                    }
                    None => Step::Descend(next_period, transition.next_stock),
                }
            };

            match step {
                Step::Advance => frame.next_order += 1,
                Step::Descend(period, stock) => {
                    self.push(&mut stack, Frame::new(period, stock))?;
                }
                Step::Finish => {
                    if let Some(done) = stack.pop() {
                        memo.insert((done.period, done.stock), done.best_cost);
                        policy.record(done.period, done.stock, done.best_order);
                    }
                }
            }
        }

        let min_cost = memo
            .get(&(1, params.initial_stock()))
            .copied()
            .unwrap_or(f64::INFINITY);

        info!(
            horizon,
            capacity,
            states = memo.len(),
            min_cost,
            "top-down solve complete"
        );

        Ok(TopDownSolution {
            min_cost,
            policy,
            states_evaluated: memo.len(),
        })
    }

    fn push(&self, stack: &mut Vec<Frame>, frame: Frame) -> Result<(), SolveError> {
        if let Some(depth_limit) = self.depth_limit {
            if stack.len() >= depth_limit {
                return Err(SolveError::RecursionDepthExceeded {
                    horizon: self.params.horizon(),
                    depth_limit,
                });
            }
        }
        debug!(period = frame.period, stock = frame.stock, "descending");
        stack.push(frame);
        Ok(())
    }
}

/// Top-down solve with an optional frame budget.
pub fn solve(
    params: &ModelParameters,
    depth_limit: Option<usize>,
) -> Result<TopDownSolution, SolveError> {
    TopDownSolver::new(params).with_depth_limit(depth_limit).solve()
}
