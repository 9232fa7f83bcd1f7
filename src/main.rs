use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::Path;

use topogen::config::{ExpandOptions, NeighbourCount, DEFAULT_TOPOLOGY_FILE};
use topogen::orchestrator::generate_neighbour_topology;

/// Generates a border-router topology with a given number of neighbour ASes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Total number of neighbour interfaces, template included
    #[arg(short, long, default_value = "1")]
    neighbours: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let neighbours: NeighbourCount = args
        .neighbours
        .parse()
        .wrap_err("Invalid --neighbours value")?;

    info!("Input topology: {}", DEFAULT_TOPOLOGY_FILE);
    info!("Neighbours: {}", neighbours);

    let output = generate_neighbour_topology(
        Path::new(DEFAULT_TOPOLOGY_FILE),
        Path::new("."),
        &ExpandOptions::default(),
        neighbours,
    )
    .wrap_err_with(|| format!("Failed to generate topology with {} neighbours", neighbours))?;

    info!("Topology written to {:?}", output);
    Ok(())
}
