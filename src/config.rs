//! Generator configuration.
//!
//! The generator has no configuration file. Every knob is a well-known
//! constant, grouped into [`ExpandOptions`] so the library can be driven with
//! other values in tests.

use crate::error::TopogenError;
use crate::topology::InterfaceId;
use std::fmt;
use std::str::FromStr;

/// Input document read from the working directory
pub const DEFAULT_TOPOLOGY_FILE: &str = "topology.json";

/// The only border router whose interfaces are expanded
pub const BORDER_ROUTER_NAME: &str = "br1-ff00_0_120-1";

/// Interface used as the template for every generated neighbour
pub const TEMPLATE_INTERFACE_ID: InterfaceId = 1;

/// AS number the neighbour offsets are added to (0x120 = 288)
pub const BASE_AS_NUMBER: u64 = 0x120;

/// ISD and upper AS groups shared by all generated neighbours
pub const ISD_AS_PREFIX: &str = "1-ff00:0:";

/// Appended to the neighbour count to form the output file name
pub const OUTPUT_FILE_SUFFIX: &str = "neighbour_topo.json";

/// Indentation used when writing the output document
pub const OUTPUT_INDENT: &[u8] = b"   ";

/// Parameters of a single expansion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandOptions {
    pub border_router: String,
    pub template_interface: InterfaceId,
    pub base_as_number: u64,
    pub isd_as_prefix: String,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            border_router: BORDER_ROUTER_NAME.to_string(),
            template_interface: TEMPLATE_INTERFACE_ID,
            base_as_number: BASE_AS_NUMBER,
            isd_as_prefix: ISD_AS_PREFIX.to_string(),
        }
    }
}

impl ExpandOptions {
    /// ISD-AS string for the neighbour behind interface `index`.
    ///
    /// The AS part is `base_as_number + index` in lowercase hex, unpadded.
    pub fn isd_as_for(&self, index: InterfaceId) -> Result<String, TopogenError> {
        let as_number = self.base_as_number.checked_add(index).ok_or_else(|| {
            TopogenError::InvalidArgument(format!(
                "AS number {:#x} + {} overflows",
                self.base_as_number, index
            ))
        })?;
        Ok(format!("{}{:x}", self.isd_as_prefix, as_number))
    }
}

/// Total number of interfaces the output should contain (template included).
///
/// Always at least 1; a count of 1 means "no neighbours".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NeighbourCount(u64);

impl NeighbourCount {
    pub fn new(count: u64) -> Result<Self, TopogenError> {
        if count < 1 {
            return Err(TopogenError::InvalidArgument(
                "neighbour count must be at least 1".to_string(),
            ));
        }
        Ok(Self(count))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Name of the file the expanded topology is written to
    pub fn output_file_name(self) -> String {
        format!("{}{}", self.0, OUTPUT_FILE_SUFFIX)
    }
}

impl FromStr for NeighbourCount {
    type Err = TopogenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.trim().parse::<u64>().map_err(|_| {
            TopogenError::InvalidArgument(format!(
                "neighbour count '{}' is not a positive integer",
                s
            ))
        })?;
        Self::new(count)
    }
}

impl fmt::Display for NeighbourCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
