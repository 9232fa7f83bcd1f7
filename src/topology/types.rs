//! Topology document types.
//!
//! The document is kept as an insertion-ordered `serde_json::Map` so that
//! everything the generator does not touch is written back exactly as it was
//! read, key order and explicit `null`s included. Typed accessors walk
//! `BorderRouters -> <router> -> Interfaces` and check only that path.

use crate::error::TopogenError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Interface identifier, serialized as a decimal string key
pub type InterfaceId = u64;

/// Interfaces of a border router, keyed by the decimal interface id
pub type InterfaceTable = Map<String, Value>;

pub const BORDER_ROUTERS_KEY: &str = "BorderRouters";
pub const INTERFACES_KEY: &str = "Interfaces";
pub const ISD_AS_KEY: &str = "ISD_AS";

/// Root of a topology document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topology(Map<String, Value>);

impl Topology {
    /// Number of entries under `BorderRouters`, 0 if the section is absent
    pub fn border_router_count(&self) -> usize {
        self.0
            .get(BORDER_ROUTERS_KEY)
            .and_then(Value::as_object)
            .map_or(0, Map::len)
    }

    /// Look up a border router by name
    pub fn border_router(&self, name: &str) -> Result<&Map<String, Value>, TopogenError> {
        let routers = as_object(self.0.get(BORDER_ROUTERS_KEY), || BORDER_ROUTERS_KEY.to_string())?;
        as_object(routers.get(name), || router_path(name))
    }

    /// Look up a border router by name for modification
    pub fn border_router_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>, TopogenError> {
        let routers = as_object_mut(self.0.get_mut(BORDER_ROUTERS_KEY), || {
            BORDER_ROUTERS_KEY.to_string()
        })?;
        as_object_mut(routers.get_mut(name), || router_path(name))
    }

    /// Interface table of the named border router
    pub fn interfaces(&self, router: &str) -> Result<&InterfaceTable, TopogenError> {
        let br = self.border_router(router)?;
        as_object(br.get(INTERFACES_KEY), || interfaces_path(router))
    }

    /// Interface table of the named border router, for modification
    pub fn interfaces_mut(&mut self, router: &str) -> Result<&mut InterfaceTable, TopogenError> {
        let br = self.border_router_mut(router)?;
        as_object_mut(br.get_mut(INTERFACES_KEY), || interfaces_path(router))
    }
}

pub(crate) fn router_path(router: &str) -> String {
    format!("{}.{}", BORDER_ROUTERS_KEY, router)
}

pub(crate) fn interfaces_path(router: &str) -> String {
    format!("{}.{}.{}", BORDER_ROUTERS_KEY, router, INTERFACES_KEY)
}

fn as_object<'a>(
    value: Option<&'a Value>,
    path: impl FnOnce() -> String,
) -> Result<&'a Map<String, Value>, TopogenError> {
    match value {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(TopogenError::not_an_object(path())),
        None => Err(TopogenError::missing(path())),
    }
}

fn as_object_mut<'a>(
    value: Option<&'a mut Value>,
    path: impl FnOnce() -> String,
) -> Result<&'a mut Map<String, Value>, TopogenError> {
    match value {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(TopogenError::not_an_object(path())),
        None => Err(TopogenError::missing(path())),
    }
}

/// Attributes of a single interface.
///
/// `ISD_AS` names the neighbour behind the interface; link type, addresses,
/// bandwidth and the rest are opaque and keep their order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceDescriptor(Map<String, Value>);

impl InterfaceDescriptor {
    pub fn from_map(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn isd_as(&self) -> Option<&str> {
        self.0.get(ISD_AS_KEY).and_then(Value::as_str)
    }

    /// Deep copy of this descriptor with `ISD_AS` replaced.
    ///
    /// `ISD_AS` keeps its position if the template has one and is appended
    /// otherwise. The copy owns all of its attributes.
    pub fn replicate(&self, isd_as: String) -> Self {
        let mut attributes = Map::with_capacity(self.0.len() + 1);
        for (key, value) in &self.0 {
            attributes.insert(key.clone(), value.clone());
        }
        attributes.insert(ISD_AS_KEY.to_string(), Value::String(isd_as));
        Self(attributes)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
