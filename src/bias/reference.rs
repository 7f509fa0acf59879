use sitegrid::{manhattan, Coordinate, GridModel};

use crate::bias::{pair_bias, scaled_mean, BiasComputer, PairBias};

/// Straightforward per-site and per-pair loops.
///
/// This is the reference the vectorized computer is checked against.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceBiasComputer;

impl ReferenceBiasComputer {
    /// Sum of distances from `site` to every coordinate in `targets`.
    fn total_distance(site: Coordinate, targets: &[Coordinate]) -> i64 {
        targets.iter().map(|&target| manhattan(site, target) as i64).sum()
    }
}

impl BiasComputer for ReferenceBiasComputer {
    fn name(&self) -> &str { "reference" }

    fn poi_proximity(&self, model: &GridModel, weight: f64) -> Vec<f64> {
        let pois = model.pois();
        model.candidates().iter()
            .map(|&site| scaled_mean(Self::total_distance(site, pois), pois.len(), weight))
            .collect()
    }

    fn existing_separation(&self, model: &GridModel, weight: f64) -> Vec<f64> {
        let existing = model.existing();
        model.candidates().iter()
            .map(|&site| -scaled_mean(Self::total_distance(site, existing), existing.len(), weight))
            .collect()
    }

    fn pairwise_separation(&self, model: &GridModel, weight: f64) -> Vec<PairBias> {
        let sites = model.candidates();
        let k = sites.len();
        let mut pairs = Vec::with_capacity(k * k.saturating_sub(1) / 2);

        for u in 0..k {
            for v in u + 1..k {
                let distance = manhattan(sites[u], sites[v]) as i64;
                pairs.push(PairBias { u, v, bias: pair_bias(distance, weight) });
            }
        }

        pairs
    }
}
