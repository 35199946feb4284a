//! Carrier and service types.
//!
//! A `Service` is a carrier's scheduled rotation, expressed as an ordered
//! list of legs. Legs are expected to form a contiguous chain (each leg
//! departs where the previous one arrived), but that is a property of the
//! data feed rather than of the type: it is checked at ingestion by
//! [`Service::check_contiguity`] and never by the route search.

use serde::{Deserialize, Serialize};

use super::{CarrierId, DomainError, LegId, PortId, ServiceId};

/// An ocean carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub id: CarrierId,
    pub name: String,
    pub code: String,
    /// Display colour, e.g. "#3b82f6"
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// One scheduled port-to-port movement within a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLeg {
    pub id: LegId,
    pub origin_port_id: PortId,
    pub destination_port_id: PortId,
    pub transit_time_days: u32,
    pub carrier_id: CarrierId,
}

impl ServiceLeg {
    pub fn new(
        id: impl Into<LegId>,
        origin: impl Into<PortId>,
        destination: impl Into<PortId>,
        transit_time_days: u32,
        carrier_id: impl Into<CarrierId>,
    ) -> Self {
        Self {
            id: id.into(),
            origin_port_id: origin.into(),
            destination_port_id: destination.into(),
            transit_time_days,
            carrier_id: carrier_id.into(),
        }
    }

    /// Returns true if this leg departs from or arrives at `port`.
    pub fn touches(&self, port: &PortId) -> bool {
        &self.origin_port_id == port || &self.destination_port_id == port
    }
}

/// A carrier service: an ordered rotation of legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub carrier_id: CarrierId,
    pub name: String,
    pub code: String,
    pub legs: Vec<ServiceLeg>,
}

impl Service {
    pub fn new(
        id: impl Into<ServiceId>,
        carrier_id: impl Into<CarrierId>,
        name: impl Into<String>,
        code: impl Into<String>,
        legs: Vec<ServiceLeg>,
    ) -> Self {
        Self {
            id: id.into(),
            carrier_id: carrier_id.into(),
            name: name.into(),
            code: code.into(),
            legs,
        }
    }

    /// Returns true if any leg departs from or arrives at `port`.
    pub fn calls_at(&self, port: &PortId) -> bool {
        self.legs.iter().any(|leg| leg.touches(port))
    }

    /// Ports touched by this service, in order of first appearance.
    ///
    /// Each leg contributes its origin then its destination.
    pub fn ports(&self) -> Vec<&PortId> {
        let mut ports: Vec<&PortId> = Vec::new();
        for leg in &self.legs {
            for port in [&leg.origin_port_id, &leg.destination_port_id] {
                if !ports.contains(&port) {
                    ports.push(port);
                }
            }
        }
        ports
    }

    /// First leg arriving at `port`, if any.
    pub fn inbound_leg(&self, port: &PortId) -> Option<&ServiceLeg> {
        self.legs
            .iter()
            .find(|leg| &leg.destination_port_id == port)
    }

    /// First leg departing from `port`, if any.
    pub fn outbound_leg(&self, port: &PortId) -> Option<&ServiceLeg> {
        self.legs.iter().find(|leg| &leg.origin_port_id == port)
    }

    /// Check that the legs form a contiguous chain.
    ///
    /// # Errors
    ///
    /// Returns the first break found, or `EmptyService` if there are no legs.
    pub fn check_contiguity(&self) -> Result<(), DomainError> {
        if self.legs.is_empty() {
            return Err(DomainError::EmptyService(self.id.clone()));
        }

        for (index, pair) in self.legs.windows(2).enumerate() {
            if pair[0].destination_port_id != pair[1].origin_port_id {
                return Err(DomainError::BrokenChain {
                    service: self.id.clone(),
                    index,
                    arrives: pair[0].destination_port_id.clone(),
                    departs: pair[1].origin_port_id.clone(),
                });
            }
        }

        Ok(())
    }
}
