//! Domain types for the route discovery server.
//!
//! This module contains the carrier-network model (ports, services,
//! connections), the immutable snapshot handed to the route search, and the
//! route results it produces.

mod connection;
mod error;
mod id;
mod port;
mod route;
mod service;
mod snapshot;

pub use connection::{InlandConnection, TransportMode, TransshipmentConnection};
pub use error::DomainError;
pub use id::{CarrierId, ConnectionId, LegId, PortId, ServiceId};
pub use port::{Coordinates, Port, PortType};
pub use route::{InlandLeg, RouteResult, RouteSegment, RouteType, SeaMode};
pub use service::{Carrier, Service, ServiceLeg};
pub use snapshot::{NetworkData, NetworkSnapshot};
