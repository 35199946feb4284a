//! Route result types.
//!
//! A `RouteResult` is one candidate path from the requested origin to the
//! requested destination: an optional inland pre-carriage, one or two sea
//! segments, and an optional inland on-carriage. Results are built fresh
//! for each search and never stored.

use std::ops::Range;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{CarrierId, Port, Service, ServiceLeg, TransportMode};

/// How the sea portion of a route is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeaMode {
    /// One service covers the whole sea portion.
    Direct,
    /// Two services joined at an interchange port.
    Transshipment,
}

/// The single route tag shown to users.
///
/// Any inland leg makes a route `Intermodal`, hiding whether its sea
/// portion was direct or transshipped. That distinction is kept separately
/// in [`RouteResult::sea_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteType {
    Direct,
    Transshipment,
    Intermodal,
}

impl From<SeaMode> for RouteType {
    fn from(mode: SeaMode) -> Self {
        match mode {
            SeaMode::Direct => RouteType::Direct,
            SeaMode::Transshipment => RouteType::Transshipment,
        }
    }
}

/// Inland movement between a hub and a gateway seaport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlandLeg {
    pub origin: Port,
    pub destination: Port,
    pub mode: TransportMode,
    pub transit_time: u32,
}

/// The part of a route carried by one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub service: Arc<Service>,
    pub origin: Port,
    pub destination: Port,
    /// Sum of the legs' transit days
    pub transit_time: u32,
    /// Contiguous run of the service's legs, in service order
    pub legs: Vec<ServiceLeg>,
}

impl RouteSegment {
    /// Builds a segment from a run of `service`'s legs.
    ///
    /// `chain` indexes into `service.legs` and must be in bounds.
    pub fn from_chain(
        service: &Arc<Service>,
        origin: &Port,
        destination: &Port,
        chain: Range<usize>,
    ) -> Self {
        let legs = service.legs[chain].to_vec();
        let transit_time = legs
            .iter()
            .fold(0u32, |acc, leg| acc.saturating_add(leg.transit_time_days));

        Self {
            service: Arc::clone(service),
            origin: origin.clone(),
            destination: destination.clone(),
            transit_time,
            legs,
        }
    }

    /// Carrier operating this segment's service.
    pub fn carrier_id(&self) -> &CarrierId {
        &self.service.carrier_id
    }
}

/// One ranked candidate route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Key for display; not unique across different gateway choices
    pub id: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub sea_mode: SeaMode,
    pub has_inland_legs: bool,
    pub total_transit_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_carriage: Option<InlandLeg>,
    pub segments: Vec<RouteSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_carriage: Option<InlandLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transshipment_port: Option<Port>,
}

impl RouteResult {
    /// Where the route starts: the pre-carriage origin, else the first sea port.
    pub fn departure_port(&self) -> Option<&Port> {
        match &self.pre_carriage {
            Some(leg) => Some(&leg.origin),
            None => self.segments.first().map(|s| &s.origin),
        }
    }

    /// Where the route ends: the on-carriage destination, else the last sea port.
    pub fn arrival_port(&self) -> Option<&Port> {
        match &self.on_carriage {
            Some(leg) => Some(&leg.destination),
            None => self.segments.last().map(|s| &s.destination),
        }
    }

    /// Carriers operating the sea segments, in segment order.
    pub fn carriers(&self) -> impl Iterator<Item = &CarrierId> {
        self.segments.iter().map(RouteSegment::carrier_id)
    }

    /// Number of service changes (0 for direct sea routes).
    pub fn change_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, PortType};

    fn port(id: &str, name: &str, port_type: PortType) -> Port {
        Port::new(id, name, id.to_uppercase(), "X", Coordinates::new(0.0, 0.0), port_type)
    }

    fn service() -> Arc<Service> {
        Arc::new(Service::new(
            "s1",
            "c1",
            "AE1",
            "AE1",
            vec![
                ServiceLeg::new("l1", "p1", "p2", 6, "c1"),
                ServiceLeg::new("l2", "p2", "p3", 23, "c1"),
                ServiceLeg::new("l3", "p3", "p5", 2, "c1"),
            ],
        ))
    }

    #[test]
    fn segment_sums_its_chain() {
        let svc = service();
        let sha = port("p1", "Shanghai", PortType::Seaport);
        let rtm = port("p3", "Rotterdam", PortType::Seaport);

        let segment = RouteSegment::from_chain(&svc, &sha, &rtm, 0..2);
        assert_eq!(segment.transit_time, 29);
        assert_eq!(segment.legs.len(), 2);
        assert_eq!(segment.carrier_id(), &CarrierId::new("c1"));
    }

    #[test]
    fn route_type_from_sea_mode() {
        assert_eq!(RouteType::from(SeaMode::Direct), RouteType::Direct);
        assert_eq!(
            RouteType::from(SeaMode::Transshipment),
            RouteType::Transshipment
        );
    }

    #[test]
    fn endpoints_prefer_inland_legs() {
        let svc = service();
        let sha = port("p1", "Shanghai", PortType::Seaport);
        let ham = port("p5", "Hamburg", PortType::Seaport);
        let yiwu = port("p_yiw", "Yiwu", PortType::Inland);

        let mut route = RouteResult {
            id: "direct-s1".into(),
            route_type: RouteType::Direct,
            sea_mode: SeaMode::Direct,
            has_inland_legs: false,
            total_transit_time: 31,
            pre_carriage: None,
            segments: vec![RouteSegment::from_chain(&svc, &sha, &ham, 0..3)],
            on_carriage: None,
            transshipment_port: None,
        };
        assert_eq!(route.departure_port().unwrap().id, sha.id);
        assert_eq!(route.arrival_port().unwrap().id, ham.id);
        assert_eq!(route.change_count(), 0);

        route.pre_carriage = Some(InlandLeg {
            origin: yiwu.clone(),
            destination: sha,
            mode: TransportMode::Truck,
            transit_time: 1,
        });
        assert_eq!(route.departure_port().unwrap().id, yiwu.id);
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_legs() {
        let svc = service();
        let sha = port("p1", "Shanghai", PortType::Seaport);
        let ham = port("p5", "Hamburg", PortType::Seaport);
        let route = RouteResult {
            id: "direct-s1".into(),
            route_type: RouteType::Direct,
            sea_mode: SeaMode::Direct,
            has_inland_legs: false,
            total_transit_time: 31,
            pre_carriage: None,
            segments: vec![RouteSegment::from_chain(&svc, &sha, &ham, 0..3)],
            on_carriage: None,
            transshipment_port: None,
        };

        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["type"], "DIRECT");
        assert_eq!(json["seaMode"], "DIRECT");
        assert_eq!(json["hasInlandLegs"], false);
        assert_eq!(json["totalTransitTime"], 31);
        assert_eq!(json["segments"][0]["transitTime"], 31);
        assert_eq!(json["segments"][0]["service"]["code"], "AE1");
        assert!(json.get("preCarriage").is_none());
        assert!(json.get("transshipmentPort").is_none());
    }
}
