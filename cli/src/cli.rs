use std::path::PathBuf;

use facility_qubo::ComputeStrategy;

/// Facility placement objective builder (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "facility-qubo", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the placement objective for a scenario (forbids stdout)
    Build(BuildArgs),

    /// Describe a chosen set of new sites against a scenario
    Summarize(SummarizeArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum Strategy { Reference, Vectorized, Checked }

impl From<Strategy> for ComputeStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Reference => ComputeStrategy::Reference,
            Strategy::Vectorized => ComputeStrategy::Vectorized,
            Strategy::Checked => ComputeStrategy::Checked,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Scenario file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub scenario: PathBuf,

    /// Output objective file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// How the bias terms are computed
    #[arg(long, value_enum, default_value_t = Strategy::Reference)]
    pub strategy: Strategy,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct SummarizeArgs {
    /// Scenario file (JSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub scenario: PathBuf,

    /// Selected sites as "col,row" (repeatable)
    #[arg(short, long = "selected", value_parser = parse_site, required = true)]
    pub selected: Vec<(u32, u32)>,
}

fn parse_site(s: &str) -> Result<(u32, u32), String> {
    let (col, row) = s.split_once(',').ok_or_else(|| format!("expected \"col,row\", got \"{s}\""))?;
    let col = col.trim().parse().map_err(|e| format!("bad column in \"{s}\": {e}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row in \"{s}\": {e}"))?;
    Ok((col, row))
}
