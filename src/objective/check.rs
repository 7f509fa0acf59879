use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::error;

use crate::error::{ModelError, Result};
use crate::objective::Objective;

/// Largest relative difference tolerated between two computers.
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Relative closeness, with a unit floor so values near zero compare absolutely.
#[inline]
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn compare_maps<K: Ord + Display>(
    term: &'static str,
    reference: &BTreeMap<K, f64>,
    other: &BTreeMap<K, f64>,
) -> Result<()> {
    if reference.len() != other.len() {
        return Err(divergence(term, format!("{} entries vs {}", reference.len(), other.len())));
    }

    for ((ref_key, &ref_bias), (key, &bias)) in reference.iter().zip(other.iter()) {
        if ref_key != key {
            return Err(divergence(term, format!("key {ref_key} vs {key}")));
        }
        if !close(ref_bias, bias) {
            return Err(divergence(term, format!("at {key}: {ref_bias} vs {bias}")));
        }
    }

    Ok(())
}

fn divergence(term: &'static str, detail: String) -> ModelError {
    error!(term, %detail, "vectorized objective diverged from reference");
    ModelError::NumericDivergence { term, detail }
}

/// Check that `other` matches `reference` key-for-key within [`RELATIVE_TOLERANCE`].
pub fn cross_check(reference: &Objective, other: &Objective) -> Result<()> {
    compare_maps("linear", reference.linear(), other.linear())?;
    compare_maps("quadratic", reference.quadratic(), other.quadratic())?;
    if !close(reference.offset(), other.offset()) {
        return Err(divergence("offset", format!("{} vs {}", reference.offset(), other.offset())));
    }
    Ok(())
}
