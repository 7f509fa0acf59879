use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use facility_qubo::{Coordinate, Grid, GridModel, WeightParameters};
use serde::Deserialize;

/// A placement scenario as supplied by the scenario generator.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub pois: Vec<Coordinate>,
    #[serde(default)]
    pub existing: Vec<Coordinate>,
    /// Defaults to every cell without an existing facility.
    pub candidates: Option<Vec<Coordinate>>,
    pub target: usize,
    /// Defaults to weights scaled to the candidate count.
    pub weights: Option<WeightParameters>,
}

/// A validated scenario, ready to build.
#[derive(Debug)]
pub struct Scenario {
    pub model: GridModel,
    pub target: usize,
    pub weights: WeightParameters,
}

impl ScenarioFile {
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn into_scenario(self) -> Result<Scenario> {
        let grid = Grid::new(self.width, self.height)?;
        let model = match self.candidates {
            Some(candidates) => GridModel::new(grid, self.pois, self.existing, candidates)?,
            None => GridModel::with_open_cells(grid, self.pois, self.existing)?,
        };
        let weights = self.weights.unwrap_or_else(|| WeightParameters::candidate_scaled(model.num_candidates()));

        Ok(Scenario { model, target: self.target, weights })
    }
}
