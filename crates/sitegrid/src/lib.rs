pub mod coord;
pub mod grid;
pub mod model;

pub use coord::{manhattan, Coordinate};
pub use grid::{Grid, GridError};
pub use model::GridModel;
