use std::collections::BTreeMap;

use sitegrid::Coordinate;

use crate::objective::Objective;

/// A 0/1 value for each candidate site, as returned by a solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<Coordinate, bool>,
}

impl Assignment {
    /// Assign every site in `variables` to 0, then every site in `selected` to 1.
    pub fn from_selected(
        variables: impl IntoIterator<Item = Coordinate>,
        selected: impl IntoIterator<Item = Coordinate>,
    ) -> Self {
        let mut values: BTreeMap<Coordinate, bool> = variables.into_iter().map(|site| (site, false)).collect();
        values.extend(selected.into_iter().map(|site| (site, true)));
        Self { values }
    }

    /// Set the value of a single site.
    pub fn set(&mut self, site: Coordinate, value: bool) { self.values.insert(site, value); }

    /// Whether `site` was assigned 1.
    #[inline]
    pub fn is_selected(&self, site: Coordinate) -> bool { self.values.get(&site).copied().unwrap_or(false) }

    /// Sites assigned 1, in canonical order.
    pub fn selected(&self) -> Vec<Coordinate> {
        self.values.iter().filter(|(_, on)| **on).map(|(site, _)| *site).collect()
    }

    pub fn count_selected(&self) -> usize { self.values.values().filter(|on| **on).count() }

    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// An external optimizer: submit an objective, receive an approximately
/// energy-minimal assignment.
///
/// No implementation lives in this crate; sampling back ends are supplied
/// by the caller.
pub trait Solver {
    fn solve(&self, objective: &Objective) -> anyhow::Result<Assignment>;

    /// Solver name for logging/debugging.
    fn name(&self) -> &str;
}
