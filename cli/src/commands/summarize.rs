use anyhow::{ensure, Result};
use facility_qubo::{Coordinate, PlacementSummary};

use crate::cli::{Cli, SummarizeArgs};
use crate::scenario::ScenarioFile;

pub fn run(_cli: &Cli, args: &SummarizeArgs) -> Result<()> {
    let scenario = ScenarioFile::read(&args.scenario)?.into_scenario()?;

    let selected: Vec<Coordinate> = args.selected.iter().map(|&site| Coordinate::from(site)).collect();
    for &site in &selected {
        ensure!(
            scenario.model.candidate_index(site).is_some(),
            "[summarize] {site} is not a candidate site of this scenario"
        );
    }
    if selected.len() != scenario.target {
        tracing::warn!(selected = selected.len(), new_sites = scenario.target, "[summarize] selection size differs from target");
    }

    print!("{}", PlacementSummary::new(&scenario.model, &selected));
    Ok(())
}
