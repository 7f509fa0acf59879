use std::collections::BTreeMap;

use sitegrid::{Coordinate, GridModel};
use tracing::info;

use crate::bias::SubObjectives;
use crate::error::{ModelError, Result};
use crate::objective::{Objective, SitePair};

/// Sum the four sub-objectives into one objective over `model`'s candidates.
///
/// Per variable: `poi + existing + cardinality.linear`, in that order.
/// Per pair: `pairwise + cardinality.quadratic`, in that order. Candidates
/// are visited in their sorted order, so identical inputs give bit-identical
/// output.
pub fn assemble(model: &GridModel, parts: &SubObjectives) -> Result<Objective> {
    let sites = model.candidates();
    let k = sites.len();

    if parts.poi.len() != k || parts.existing.len() != k {
        return Err(ModelError::InvalidConfiguration(format!(
            "bias vectors cover {}/{} sites but the model has {k} candidates",
            parts.poi.len(), parts.existing.len(),
        )));
    }

    let linear: BTreeMap<Coordinate, f64> = sites.iter().enumerate()
        .map(|(i, &site)| (site, parts.poi[i] + parts.existing[i] + parts.cardinality.linear))
        .collect();

    let mut quadratic: BTreeMap<SitePair, f64> = BTreeMap::new();
    for term in &parts.pairwise {
        let pair = pair_of(sites, term.u, term.v)?;
        *quadratic.entry(pair).or_insert(0.0) += term.bias;
    }
    for u in 0..k {
        for v in u + 1..k {
            let pair = pair_of(sites, u, v)?;
            *quadratic.entry(pair).or_insert(0.0) += parts.cardinality.quadratic;
        }
    }

    let objective = Objective::from_parts(linear, quadratic, 0.0)?;
    info!(
        variables = objective.num_variables(),
        interactions = objective.num_interactions(),
        new_sites = parts.cardinality.target,
        "assembled objective"
    );

    Ok(objective)
}

fn pair_of(sites: &[Coordinate], u: usize, v: usize) -> Result<SitePair> {
    let (Some(&a), Some(&b)) = (sites.get(u), sites.get(v)) else {
        return Err(ModelError::InvalidConfiguration(
            format!("pair ({u}, {v}) is out of range for {} candidates", sites.len())
        ));
    };
    SitePair::new(a, b).ok_or_else(|| ModelError::InvalidConfiguration(format!("self-pair at candidate {u}")))
}
