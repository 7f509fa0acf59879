use std::io::{BufWriter, Write};

use anyhow::Result;
use facility_qubo::build_objective;
use tracing::info;

use crate::cli::{BuildArgs, Cli};
use crate::io::{finalize_write, open_for_write};
use crate::scenario::ScenarioFile;

pub fn run(_cli: &Cli, args: &BuildArgs) -> Result<()> {
    // Fail on the output path before doing any work.
    let mut sink = open_for_write(&args.output, args.force)?;

    info!(path = %args.scenario.display(), "[build] loading scenario");
    let scenario = ScenarioFile::read(&args.scenario)?.into_scenario()?;

    let objective = build_objective(&scenario.model, scenario.target, &scenario.weights, args.strategy.into())?;
    info!(%objective, "[build] objective ready");

    let mut writer = BufWriter::new(&mut sink);
    objective.write_json(&mut writer)?;
    writer.flush()?;
    drop(writer);
    finalize_write(sink)?;

    info!(path = %args.output.display(), "[build] wrote objective");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use facility_qubo::{Coordinate, Objective};

    use crate::cli::Commands;

    use super::*;

    #[test]
    fn writes_objective_for_scenario_file() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = dir.path().join("city.json");
        let output = dir.path().join("objective.json");
        fs::write(&scenario, r#"{
            "width": 4, "height": 4,
            "pois": [[0, 0]], "existing": [[3, 3]],
            "target": 2,
            "weights": {"poi": 1.0, "existing": 1.0, "pairwise": 1.0, "cardinality": 1.0}
        }"#).unwrap();

        let cli = Cli::parse_from([
            "facility-qubo", "build",
            scenario.to_str().unwrap(), "-o", output.to_str().unwrap(), "--strategy", "checked",
        ]);
        let Commands::Build(args) = &cli.command else { panic!("expected build") };
        run(&cli, args).unwrap();

        let objective = Objective::read_json(fs::File::open(&output).unwrap()).unwrap();
        assert_eq!(objective.num_variables(), 15);
        assert_eq!(objective.linear_bias(Coordinate::new(0, 0)), Some(-9.0));

        // A second run without --force must not clobber the file.
        assert!(run(&cli, args).is_err());
    }
}
