//! Topology document model and neighbour interface expansion.

pub mod expander;
pub mod types;

pub use expander::{expand, expand_interfaces};
pub use types::{InterfaceDescriptor, InterfaceId, InterfaceTable, Topology};
