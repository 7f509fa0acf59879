//! The assembled binary quadratic objective handed to a solver.
//!
//! Lower energy means a more preferred selection of sites:
//!
//! ```text
//! energy(x) = offset + sum_i linear[i] x_i + sum_{i<j} quadratic[i,j] x_i x_j
//! ```
//!
//! Both maps are ordered, so iteration (and therefore any accumulation over
//! them) is reproducible across runs.

use std::collections::BTreeMap;
use std::fmt;

use sitegrid::Coordinate;

use crate::error::{ModelError, Result};
use crate::solver::Assignment;

/// An unordered pair of distinct sites, stored as `(lo, hi)` with `lo < hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SitePair {
    lo: Coordinate,
    hi: Coordinate,
}

impl SitePair {
    /// Normalize `(a, b)`; `None` when `a == b`.
    pub fn new(a: Coordinate, b: Coordinate) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Some(Self { lo: b, hi: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[inline] pub fn lo(&self) -> Coordinate { self.lo }

    #[inline] pub fn hi(&self) -> Coordinate { self.hi }

    #[inline] pub fn contains(&self, site: Coordinate) -> bool { self.lo == site || self.hi == site }
}

impl fmt::Display for SitePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// Linear biases per site, quadratic biases per site pair, and a constant offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Objective {
    linear: BTreeMap<Coordinate, f64>,
    quadratic: BTreeMap<SitePair, f64>,
    offset: f64,
}

impl Objective {
    /// Build an objective from its parts, checking that every pair refers
    /// to sites that are variables of the model.
    pub fn from_parts(
        linear: BTreeMap<Coordinate, f64>,
        quadratic: BTreeMap<SitePair, f64>,
        offset: f64,
    ) -> Result<Self> {
        for pair in quadratic.keys() {
            for site in [pair.lo, pair.hi] {
                if !linear.contains_key(&site) {
                    return Err(ModelError::MalformedObjective(
                        format!("interaction {pair} refers to {site}, which is not a variable")
                    ));
                }
            }
        }
        Ok(Self { linear, quadratic, offset })
    }

    /// Linear biases, keyed by site.
    #[inline] pub fn linear(&self) -> &BTreeMap<Coordinate, f64> { &self.linear }

    /// Quadratic biases, keyed by normalized pair.
    #[inline] pub fn quadratic(&self) -> &BTreeMap<SitePair, f64> { &self.quadratic }

    #[inline] pub fn offset(&self) -> f64 { self.offset }

    #[inline] pub fn num_variables(&self) -> usize { self.linear.len() }

    #[inline] pub fn num_interactions(&self) -> usize { self.quadratic.len() }

    /// Variables (sites) in canonical order.
    pub fn variables(&self) -> impl Iterator<Item = Coordinate> + '_ { self.linear.keys().copied() }

    #[inline]
    pub fn linear_bias(&self, site: Coordinate) -> Option<f64> { self.linear.get(&site).copied() }

    /// Quadratic bias between `a` and `b`, in either order.
    pub fn quadratic_bias(&self, a: Coordinate, b: Coordinate) -> Option<f64> {
        SitePair::new(a, b).and_then(|pair| self.quadratic.get(&pair).copied())
    }

    /// Energy of an assignment. Sites missing from the assignment count as 0.
    pub fn energy(&self, assignment: &Assignment) -> f64 {
        let linear: f64 = self.linear.iter()
            .filter(|(site, _)| assignment.is_selected(**site))
            .map(|(_, bias)| bias)
            .sum();

        let quadratic: f64 = self.quadratic.iter()
            .filter(|(pair, _)| assignment.is_selected(pair.lo) && assignment.is_selected(pair.hi))
            .map(|(_, bias)| bias)
            .sum();

        self.offset + linear + quadratic
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Objective({} variables, {} interactions, offset={})",
            self.num_variables(), self.num_interactions(), self.offset)
    }
}
