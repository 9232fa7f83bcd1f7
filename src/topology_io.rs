//! Loading and writing topology documents.

use crate::config::OUTPUT_INDENT;
use crate::error::TopogenError;
use crate::topology::Topology;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Load and parse a topology document from a JSON file
pub fn load_topology(path: &Path) -> Result<Topology, TopogenError> {
    info!("Loading topology from: {:?}", path);

    let file = File::open(path).map_err(|source| TopogenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let topology: Topology =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| match source.classify() {
            serde_json::error::Category::Io => TopogenError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            },
            _ => TopogenError::Parse {
                path: path.to_path_buf(),
                source,
            },
        })?;

    debug!("Topology has {} border router(s)", topology.border_router_count());
    Ok(topology)
}

/// Render a topology as indented JSON.
///
/// Keys keep the order they were read in. Non-ASCII text is written as raw
/// UTF-8 rather than `\u` escapes.
pub fn to_pretty_json(topology: &Topology) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(OUTPUT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    topology.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write a topology to `path`.
///
/// The document is rendered in memory and written to a sibling temporary
/// file that is then renamed over `path`, so a failed run leaves no partial
/// output behind.
pub fn write_topology(topology: &Topology, path: &Path) -> Result<(), TopogenError> {
    info!("Writing topology to: {:?}", path);

    let json = to_pretty_json(topology).map_err(|e| TopogenError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let tmp_path = temporary_path(path);
    fs::write(&tmp_path, &json).map_err(|source| TopogenError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TopogenError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Wrote {} bytes", json.len());
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
