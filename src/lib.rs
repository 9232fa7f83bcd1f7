//! # Topogen - neighbour topology generator
//!
//! Generates border-router topology fixtures with a variable number of
//! simulated neighbour autonomous systems.
//!
//! ## Overview
//!
//! A topology document describes one border router whose interface `1`
//! connects to a neighbour AS. Topogen copies that interface `N - 1` times,
//! giving interface `x` the neighbour `1-ff00:0:<hex(0x120 + x)>`, and writes
//! the result to `<N>neighbour_topo.json`.
//!
//! ## Architecture
//!
//! - `config`: well-known constants, `ExpandOptions` and `NeighbourCount`
//! - `topology`: typed document model and the interface expander
//! - `topology_io`: JSON loading and atomic, indented writing
//! - `orchestrator`: load, expand and write in one call
//! - `error`: the `TopogenError` type shared by all of the above
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use topogen::config::{ExpandOptions, NeighbourCount};
//! use topogen::orchestrator::generate_neighbour_topology;
//!
//! let neighbours: NeighbourCount = "3".parse()?;
//! let written = generate_neighbour_topology(
//!     Path::new("topology.json"),
//!     Path::new("."),
//!     &ExpandOptions::default(),
//!     neighbours,
//! )?;
//! assert_eq!(written, Path::new("./3neighbour_topo.json"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return `Result<T, TopogenError>`. The binary reports
//! them through `color_eyre`.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod topology;
pub mod topology_io;

pub use error::TopogenError;
