mod cli;
mod commands;
mod io;
mod scenario;

use cli::{Cli, Commands};
use commands::{build, summarize};
use tracing::Level;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Build(args) => build::run(&cli, args),
        Commands::Summarize(args) => summarize::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
