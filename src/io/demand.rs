// src/io/demand.rs

use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Generates a demand schedule where every period has the exact same demand.
pub fn generate_constant_demand(periods: usize, value: u32) -> Vec<u32> {
    vec![value; periods]
}

/// Generates a "Step" pattern: `before` until `step_period` (1-indexed), then `after`.
pub fn generate_step_demand(periods: usize, before: u32, after: u32, step_period: usize) -> Vec<u32> {
    (1..=periods)
        .map(|p| if p < step_period { before } else { after })
        .collect()
}

/// Samples a demand schedule from a Normal (Bell Curve) distribution.
///
/// The generator is seeded, so the same arguments always yield the same
/// schedule and the planner still works on known demand.
///
/// # Arguments
/// * `periods` - Length of the schedule.
/// * `mean` - The average demand (e.g., 10.0).
/// * `std_dev` - The standard deviation (e.g., 2.0).
/// * `seed` - RNG seed.
pub fn generate_normal_demand(
    periods: usize,
    mean: f64,
    std_dev: f64,
    seed: u64,
) -> Result<Vec<u32>, ConfigError> {
    if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
        return Err(ConfigError::InvalidDemandProfile(format!(
            "normal({mean}, {std_dev}): mean and std_dev must be finite, std_dev non-negative"
        )));
    }
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| ConfigError::InvalidDemandProfile(format!("normal({mean}, {std_dev}): {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let schedule = (0..periods)
        .map(|_| {
            let val: f64 = normal.sample(&mut rng);
            // Round, and clamp negatives to 0 (demand cannot be negative).
            let int_val = val.round();
            if int_val < 0.0 {
                0
            } else {
                int_val.min(u32::MAX as f64) as u32
            }
        })
        .collect();

    Ok(schedule)
}
