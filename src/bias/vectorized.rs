use ndarray::{Array1, Array2, ArrayView1, Axis};
use sitegrid::{Coordinate, GridModel};

use crate::bias::{pair_bias, scaled_mean, BiasComputer, PairBias};

/// Batched-array computation over all candidates at once.
///
/// Distances come from one broadcast subtraction per axis rather than
/// per-pair loops. The pairwise term materializes a full `k x k` distance
/// matrix, so memory grows quadratically with the candidate count.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorizedBiasComputer;

/// Column and row components of a coordinate list, as separate arrays.
struct Axes {
    cols: Array1<i64>,
    rows: Array1<i64>,
}

impl Axes {
    fn new(coords: &[Coordinate]) -> Self {
        Self {
            cols: coords.iter().map(|c| c.col as i64).collect(),
            rows: coords.iter().map(|c| c.row as i64).collect(),
        }
    }

    #[inline] fn len(&self) -> usize { self.cols.len() }
}

/// `|a_i - b_j|` for every `(i, j)`, shape `(a.len(), b.len())`.
fn abs_outer_diff(a: ArrayView1<i64>, b: ArrayView1<i64>) -> Array2<i64> {
    let column = a.insert_axis(Axis(1));
    let row = b.insert_axis(Axis(0));
    (&column - &row).mapv(i64::abs)
}

/// Manhattan distance matrix between two coordinate sets.
fn distance_matrix(from: &Axes, to: &Axes) -> Array2<i64> {
    abs_outer_diff(from.cols.view(), to.cols.view()) + abs_outer_diff(from.rows.view(), to.rows.view())
}

impl VectorizedBiasComputer {
    /// Row sums of the candidate-to-target distance matrix, scaled to a weighted mean.
    fn mean_distance_bias(model: &GridModel, targets: &[Coordinate], weight: f64) -> Array1<f64> {
        let sites = Axes::new(model.candidates());
        let count = targets.len();
        if count == 0 { return Array1::zeros(sites.len()) }

        let totals = distance_matrix(&sites, &Axes::new(targets)).sum_axis(Axis(1));
        totals.mapv(|total| scaled_mean(total, count, weight))
    }
}

impl BiasComputer for VectorizedBiasComputer {
    fn name(&self) -> &str { "vectorized" }

    fn poi_proximity(&self, model: &GridModel, weight: f64) -> Vec<f64> {
        Self::mean_distance_bias(model, model.pois(), weight).to_vec()
    }

    fn existing_separation(&self, model: &GridModel, weight: f64) -> Vec<f64> {
        Self::mean_distance_bias(model, model.existing(), weight).mapv(|bias| -bias).to_vec()
    }

    fn pairwise_separation(&self, model: &GridModel, weight: f64) -> Vec<PairBias> {
        let sites = Axes::new(model.candidates());
        let biases = distance_matrix(&sites, &sites).mapv(|distance| pair_bias(distance, weight));

        // Keep the strict upper triangle: drops the diagonal and the mirrored half.
        biases.indexed_iter()
            .filter(|&((u, v), _)| u < v)
            .map(|((u, v), &bias)| PairBias { u, v, bias })
            .collect()
    }
}
