//! Per-objective weights for the four placement terms.
//!
//! The objective is a weighted sum:
//!
//! ```text
//! energy = poi * proximity + existing * separation_from_existing
//!        + pairwise * separation_between_new + cardinality * (sum(x) - N)^2
//! ```
//!
//! Weights are fixed once an objective is built; nothing here is global.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ModelError, Result};

/// Lagrange-style tuning knobs, one per sub-objective.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightParameters {
    /// Pull towards points of interest. Non-negative.
    pub poi: f64,
    /// Push away from existing facilities. Non-negative.
    pub existing: f64,
    /// Push new facilities apart from each other. Non-negative.
    pub pairwise: f64,
    /// Strength of the "exactly N sites" penalty. Any finite sign.
    pub cardinality: f64,
}

impl Default for WeightParameters {
    fn default() -> Self { Self::new(1.0, 1.0, 1.0, 1.0) }
}

impl WeightParameters {
    pub const fn new(poi: f64, existing: f64, pairwise: f64, cardinality: f64) -> Self {
        Self { poi, existing, pairwise, cardinality }
    }

    /// Weights scaled to the total number of grid cells.
    pub fn grid_scaled(cell_count: usize) -> Self {
        let c = cell_count as f64;
        Self::new(c * 2.0, c / 3.0, c * 0.6, c * c)
    }

    /// Weights scaled to the number of candidate sites.
    ///
    /// The cardinality penalty grows cubically so it dominates the distance
    /// terms, whose per-pair magnitude grows only linearly with grid size.
    pub fn candidate_scaled(num_candidates: usize) -> Self {
        let k = num_candidates as f64;
        Self::new(k * 4.0, k / 3.0, k * 1.7, k * k * k)
    }

    /// Reject non-finite weights and negative distance weights.
    pub fn validate(&self) -> Result<()> {
        let distance_terms = [("poi", self.poi), ("existing", self.existing), ("pairwise", self.pairwise)];
        for (name, weight) in distance_terms {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ModelError::InvalidConfiguration(
                    format!("weight '{name}' must be finite and non-negative, got {weight}")
                ));
            }
        }

        if !self.cardinality.is_finite() {
            return Err(ModelError::InvalidConfiguration(
                format!("weight 'cardinality' must be finite, got {}", self.cardinality)
            ));
        }
        if self.cardinality <= 0.0 {
            warn!(cardinality = self.cardinality, "cardinality weight is not positive; deviations from the target count are not penalized");
        }

        Ok(())
    }
}
