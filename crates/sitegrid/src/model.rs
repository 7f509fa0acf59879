use ahash::AHashSet;

use crate::coord::Coordinate;
use crate::grid::{Grid, GridError};

/// A placement scenario: the grid, its points of interest, the facilities
/// already built, and the cells eligible for a new facility.
///
/// Candidates are kept sorted, so index `i` into [`GridModel::candidates`]
/// is the stable identity of decision variable `i`. POIs and existing
/// facilities keep the caller's order; repeats are tolerated since they
/// only ever feed into averages.
#[derive(Clone, Debug)]
pub struct GridModel {
    grid: Grid,
    pois: Vec<Coordinate>,
    existing: Vec<Coordinate>,
    candidates: Vec<Coordinate>,
}

impl GridModel {
    /// Build a model from explicit candidate sites.
    ///
    /// Fails if any coordinate falls outside the grid, if a candidate is
    /// repeated, or if a candidate sits on an existing facility.
    pub fn new(
        grid: Grid,
        pois: Vec<Coordinate>,
        existing: Vec<Coordinate>,
        candidates: Vec<Coordinate>,
    ) -> Result<Self, GridError> {
        for &poi in &pois { grid.check("point of interest", poi)?; }
        for &site in &existing { grid.check("existing facility", site)?; }

        let occupied: AHashSet<Coordinate> = existing.iter().copied().collect();
        let mut seen: AHashSet<Coordinate> = AHashSet::with_capacity(candidates.len());
        for &site in &candidates {
            grid.check("candidate site", site)?;
            if occupied.contains(&site) { return Err(GridError::OccupiedCandidate(site)) }
            if !seen.insert(site) { return Err(GridError::DuplicateCandidate(site)) }
        }

        let mut candidates = candidates;
        candidates.sort_unstable();

        Ok(Self { grid, pois, existing, candidates })
    }

    /// Build a model whose candidates are every cell not holding an existing facility.
    pub fn with_open_cells(grid: Grid, pois: Vec<Coordinate>, existing: Vec<Coordinate>) -> Result<Self, GridError> {
        for &site in &existing { grid.check("existing facility", site)?; }

        let occupied: AHashSet<Coordinate> = existing.iter().copied().collect();
        let candidates = grid.cells().filter(|cell| !occupied.contains(cell)).collect();

        Self::new(grid, pois, existing, candidates)
    }

    #[inline] pub fn grid(&self) -> &Grid { &self.grid }

    #[inline] pub fn pois(&self) -> &[Coordinate] { &self.pois }

    #[inline] pub fn existing(&self) -> &[Coordinate] { &self.existing }

    /// Candidate sites in canonical (sorted) order.
    #[inline] pub fn candidates(&self) -> &[Coordinate] { &self.candidates }

    #[inline] pub fn num_candidates(&self) -> usize { self.candidates.len() }

    /// Variable index of `site`, if it is a candidate.
    pub fn candidate_index(&self, site: Coordinate) -> Option<usize> {
        self.candidates.binary_search(&site).ok()
    }
}
