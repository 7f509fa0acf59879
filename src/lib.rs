#![doc = "Facility placement as a quadratic unconstrained binary objective"]
mod bias;
mod error;
mod objective;
mod report;
mod solver;
mod weights;

#[doc(inline)]
pub use sitegrid::{manhattan, Coordinate, Grid, GridError, GridModel};

#[doc(inline)]
pub use bias::{BiasComputer, CardinalityBias, PairBias, ReferenceBiasComputer, SubObjectives, VectorizedBiasComputer};

#[doc(inline)]
pub use error::{ModelError, Result};

#[doc(inline)]
pub use objective::{assemble, build_objective, cross_check, ComputeStrategy, Objective, SitePair, RELATIVE_TOLERANCE};

#[doc(inline)]
pub use report::{PlacementSummary, SiteSummary};

#[doc(inline)]
pub use solver::{Assignment, Solver};

#[doc(inline)]
pub use weights::WeightParameters;
