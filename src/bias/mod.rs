//! The four bias families that make up a placement objective.
//!
//! Every family is indexed by candidate position in
//! [`GridModel::candidates`], which is sorted, so two computers that agree
//! on the math also agree on the layout.

mod reference;
mod vectorized;

pub use reference::ReferenceBiasComputer;
pub use vectorized::VectorizedBiasComputer;

use sitegrid::GridModel;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::weights::WeightParameters;

/// A quadratic bias between candidates `u < v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairBias {
    pub u: usize,
    pub v: usize,
    pub bias: f64,
}

/// Uniform coefficients of the expanded penalty `weight * (sum(x) - N)^2`.
///
/// Expanding for binary `x` gives `(1 - 2N)` on every variable and `+2` on
/// every unordered pair; the constant `N^2` is dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardinalityBias {
    pub target: usize,
    pub linear: f64,
    pub quadratic: f64,
}

impl CardinalityBias {
    pub fn new(target: usize, weight: f64) -> Self {
        Self {
            target,
            linear: weight * (1.0 - 2.0 * target as f64),
            quadratic: 2.0 * weight,
        }
    }
}

/// Weighted contributions of all four sub-objectives, not yet summed.
#[derive(Clone, Debug, PartialEq)]
pub struct SubObjectives {
    /// `+w_poi * mean distance to POIs`, per candidate.
    pub poi: Vec<f64>,
    /// `-w_existing * mean distance to existing facilities`, per candidate.
    pub existing: Vec<f64>,
    /// `-w_pairwise * distance(u, v)`, for every `u < v`, sorted by `(u, v)`.
    pub pairwise: Vec<PairBias>,
    pub cardinality: CardinalityBias,
}

/// Computes the bias families for a scenario.
///
/// Implementations differ only in computational strategy; for the same
/// inputs they must produce the same numbers.
pub trait BiasComputer {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Linear bias pulling candidates towards points of interest.
    fn poi_proximity(&self, model: &GridModel, weight: f64) -> Vec<f64>;

    /// Linear bias pushing candidates away from existing facilities.
    fn existing_separation(&self, model: &GridModel, weight: f64) -> Vec<f64>;

    /// Quadratic bias pushing pairs of new facilities apart.
    fn pairwise_separation(&self, model: &GridModel, weight: f64) -> Vec<PairBias>;

    /// Penalty coefficients for selecting exactly `target` candidates.
    fn cardinality(&self, model: &GridModel, target: usize, weight: f64) -> Result<CardinalityBias> {
        check_target(model, target)?;
        Ok(CardinalityBias::new(target, weight))
    }

    /// Validate the configuration, then compute all four families.
    fn compute(&self, model: &GridModel, target: usize, weights: &WeightParameters) -> Result<SubObjectives> {
        weights.validate()?;
        check_target(model, target)?;

        let k = model.num_candidates();
        debug!(computer = self.name(), candidates = k, family = "poi", "computing bias");
        let poi = self.poi_proximity(model, weights.poi);
        debug!(computer = self.name(), candidates = k, family = "existing", "computing bias");
        let existing = self.existing_separation(model, weights.existing);
        debug!(computer = self.name(), candidates = k, family = "pairwise", "computing bias");
        let pairwise = self.pairwise_separation(model, weights.pairwise);
        let cardinality = self.cardinality(model, target, weights.cardinality)?;

        Ok(SubObjectives { poi, existing, pairwise, cardinality })
    }
}

/// Error unless `target` sites can actually be chosen.
pub(crate) fn check_target(model: &GridModel, target: usize) -> Result<()> {
    let available = model.num_candidates();
    if target > available {
        return Err(ModelError::InvalidConfiguration(
            format!("cannot select {target} new sites from {available} candidate sites")
        ));
    }
    Ok(())
}

/// `weight * total / count`, or 0 for an empty reference set.
#[inline]
pub(crate) fn scaled_mean(total: i64, count: usize, weight: f64) -> f64 {
    if count == 0 { return 0.0 }
    weight * (total as f64 / count as f64)
}

#[inline]
pub(crate) fn pair_bias(distance: i64, weight: f64) -> f64 {
    -(weight * distance as f64)
}
