//! Port types.

use serde::{Deserialize, Serialize};

use super::PortId;

/// Whether a location is reachable by sea or only over land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortType {
    /// A seaport served by ocean carrier legs.
    Seaport,
    /// An inland hub linked to seaports by rail, truck or barge.
    Inland,
}

/// Geographic position of a port.
///
/// On the wire this is a `[longitude, latitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.longitude, c.latitude]
    }
}

/// A seaport or inland hub.
///
/// Identity is the `id`; `code` and `name` are for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: PortId,
    pub name: String,
    /// UN/LOCODE style code (e.g. "NLRTM")
    pub code: String,
    pub country: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub port_type: PortType,
}

impl Port {
    /// Creates a port.
    pub fn new(
        id: impl Into<PortId>,
        name: impl Into<String>,
        code: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
        port_type: PortType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            country: country.into(),
            coordinates,
            port_type,
        }
    }

    /// Returns true if this is an inland hub.
    pub fn is_inland(&self) -> bool {
        self.port_type == PortType::Inland
    }

    /// Returns true if this is a seaport.
    pub fn is_seaport(&self) -> bool {
        self.port_type == PortType::Seaport
    }
}
