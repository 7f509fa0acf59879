mod assemble;
mod check;
mod io;
mod objective;

pub use assemble::assemble;
pub use check::{cross_check, RELATIVE_TOLERANCE};
pub use objective::{Objective, SitePair};

use serde::{Deserialize, Serialize};
use sitegrid::GridModel;
use tracing::debug;

use crate::bias::{BiasComputer, ReferenceBiasComputer, VectorizedBiasComputer};
use crate::error::Result;
use crate::weights::WeightParameters;

/// Which bias computer builds the objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeStrategy {
    /// Per-site and per-pair loops.
    #[default]
    Reference,
    /// Batched array arithmetic.
    Vectorized,
    /// Run both and fail on any disagreement.
    Checked,
}

/// Build the placement objective for selecting `target` of `model`'s candidates.
///
/// Configuration is validated before any bias is computed; on failure no
/// objective is produced.
pub fn build_objective(
    model: &GridModel,
    target: usize,
    weights: &WeightParameters,
    strategy: ComputeStrategy,
) -> Result<Objective> {
    debug!(?strategy, candidates = model.num_candidates(), new_sites = target, "building objective");
    match strategy {
        ComputeStrategy::Reference => build_with(&ReferenceBiasComputer, model, target, weights),
        ComputeStrategy::Vectorized => build_with(&VectorizedBiasComputer, model, target, weights),
        ComputeStrategy::Checked => {
            let reference = build_with(&ReferenceBiasComputer, model, target, weights)?;
            let vectorized = build_with(&VectorizedBiasComputer, model, target, weights)?;
            cross_check(&reference, &vectorized)?;
            Ok(reference)
        }
    }
}

fn build_with(computer: &impl BiasComputer, model: &GridModel, target: usize, weights: &WeightParameters) -> Result<Objective> {
    let parts = computer.compute(model, target, weights)?;
    assemble(model, &parts)
}
