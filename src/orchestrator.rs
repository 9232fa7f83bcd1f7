//! Generation orchestrator.
//!
//! Ties the loader, the expander and the writer together: read the input
//! topology, expand the border router to the requested number of
//! neighbours and write the result next to the other outputs.

use crate::config::{ExpandOptions, NeighbourCount};
use crate::error::TopogenError;
use crate::topology::expand;
use crate::topology_io::{load_topology, write_topology};
use log::info;
use std::path::{Path, PathBuf};

/// Generate `<N>neighbour_topo.json` in `output_dir` from the topology at `input`.
///
/// Returns the path of the written file. Nothing is written if loading or
/// expansion fails.
pub fn generate_neighbour_topology(
    input: &Path,
    output_dir: &Path,
    options: &ExpandOptions,
    neighbours: NeighbourCount,
) -> Result<PathBuf, TopogenError> {
    let mut topology = load_topology(input)?;

    expand(&mut topology, options, neighbours)?;

    let output_path = output_dir.join(neighbours.output_file_name());
    write_topology(&topology, &output_path)?;

    info!("Generated topology with {} neighbour(s): {:?}", neighbours, output_path);
    Ok(output_path)
}
