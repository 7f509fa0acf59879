use thiserror::Error;

use crate::coord::Coordinate;

/// Errors raised while describing a grid scenario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("{role} {coord} lies outside the {width}x{height} grid")]
    OutOfBounds { role: &'static str, coord: Coordinate, width: u32, height: u32 },

    #[error("candidate site {0} is listed more than once")]
    DuplicateCandidate(Coordinate),

    #[error("candidate site {0} is already occupied by an existing facility")]
    OccupiedCandidate(Coordinate),
}

/// A `width x height` city-block grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline] pub fn width(&self) -> u32 { self.width }

    #[inline] pub fn height(&self) -> u32 { self.height }

    /// Total number of cells.
    #[inline] pub fn cell_count(&self) -> usize { self.width as usize * self.height as usize }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Every cell, in (column, row) order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.width).flat_map(move |col| (0..self.height).map(move |row| Coordinate::new(col, row)))
    }

    /// Error unless `coord` lies inside the grid.
    pub(crate) fn check(&self, role: &'static str, coord: Coordinate) -> Result<(), GridError> {
        if self.contains(coord) { return Ok(()) }
        Err(GridError::OutOfBounds { role, coord, width: self.width, height: self.height })
    }
}
