//! Connection records linking services and locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ConnectionId, PortId, ServiceId};

/// Land transport used between an inland hub and its gateway seaport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Rail,
    Truck,
    Barge,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportMode::Rail => "RAIL",
            TransportMode::Truck => "TRUCK",
            TransportMode::Barge => "BARGE",
        })
    }
}

/// A pairing of two services that share a port as an interchange.
///
/// Only active connections take part in route discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransshipmentConnection {
    pub id: ConnectionId,
    pub service_a_id: ServiceId,
    pub service_b_id: ServiceId,
    /// Interchange port
    pub port_id: PortId,
    pub is_active: bool,
}

impl TransshipmentConnection {
    pub fn new(
        id: impl Into<ConnectionId>,
        service_a_id: impl Into<ServiceId>,
        service_b_id: impl Into<ServiceId>,
        port_id: impl Into<PortId>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            service_a_id: service_a_id.into(),
            service_b_id: service_b_id.into(),
            port_id: port_id.into(),
            is_active,
        }
    }

    /// Returns true if this connection pairs the two services, in either order.
    pub fn pairs(&self, a: &ServiceId, b: &ServiceId) -> bool {
        (&self.service_a_id == a && &self.service_b_id == b)
            || (&self.service_a_id == b && &self.service_b_id == a)
    }
}

/// A land link between an inland hub and a gateway seaport.
///
/// Stored hub → port but usable in both directions: as pre-carriage
/// (hub to port) or on-carriage (port to hub).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlandConnection {
    pub id: ConnectionId,
    /// The inland hub
    pub hub_id: PortId,
    /// The gateway seaport
    pub port_id: PortId,
    pub mode: TransportMode,
    pub transit_time_days: u32,
}

impl InlandConnection {
    pub fn new(
        id: impl Into<ConnectionId>,
        hub_id: impl Into<PortId>,
        port_id: impl Into<PortId>,
        mode: TransportMode,
        transit_time_days: u32,
    ) -> Self {
        Self {
            id: id.into(),
            hub_id: hub_id.into(),
            port_id: port_id.into(),
            mode,
            transit_time_days,
        }
    }
}
