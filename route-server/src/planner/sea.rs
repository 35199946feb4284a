//! Sea route finding between two concrete seaports.
//!
//! Two matchers run over the network snapshot:
//!
//! - **Direct**: a single service sails from the start port to the end port.
//! - **Transshipment**: two services joined at an active connection's port,
//!   the first carrying cargo from the start to the interchange and the
//!   second from the interchange to the end.
//!
//! Both use the same chain scan ([`scan_chain`]), and transshipment stops at
//! exactly one interchange.

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    NetworkSnapshot, Port, PortId, RouteSegment, SeaMode, Service, TransshipmentConnection,
};

use super::config::SearchConfig;

/// A sea-only candidate between two seaports.
#[derive(Debug, Clone)]
pub struct SeaRoute {
    /// `direct-{service}` or `trans-{connection}`
    pub id: String,
    pub mode: SeaMode,
    /// Segment times plus any interchange buffer
    pub transit_time: u32,
    pub segments: Vec<RouteSegment>,
    pub transshipment_port: Option<Port>,
}

/// Find the run of `service`'s legs carrying cargo from `from` to `to`.
///
/// Scans legs in order: the run starts at the first leg departing `from`
/// and ends at the first leg after that (inclusive) arriving at `to`.
/// Later calls at either port are not explored, so a service that loops
/// back never yields an alternative run. Returns `None` if `from` is never
/// departed or `to` is never reached after it.
pub fn scan_chain(service: &Service, from: &PortId, to: &PortId) -> Option<Range<usize>> {
    let start = service
        .legs
        .iter()
        .position(|leg| &leg.origin_port_id == from)?;
    let len = service.legs[start..]
        .iter()
        .position(|leg| &leg.destination_port_id == to)?;
    Some(start..start + len + 1)
}

/// Find all direct and single-hop transshipment routes from `start` to `end`.
///
/// Direct routes come first in service order, then transshipments in
/// connection order.
pub fn find_sea_routes(
    start: &Port,
    end: &Port,
    network: &NetworkSnapshot,
    config: &SearchConfig,
) -> Vec<SeaRoute> {
    let mut routes = direct_routes(start, end, network);
    routes.extend(transshipment_routes(start, end, network, config));
    routes
}

fn direct_routes(start: &Port, end: &Port, network: &NetworkSnapshot) -> Vec<SeaRoute> {
    network
        .services()
        .iter()
        .filter_map(|service| {
            let chain = scan_chain(service, &start.id, &end.id)?;
            let segment = RouteSegment::from_chain(service, start, end, chain);
            Some(SeaRoute {
                id: format!("direct-{}", service.id),
                mode: SeaMode::Direct,
                transit_time: segment.transit_time,
                segments: vec![segment],
                transshipment_port: None,
            })
        })
        .collect()
}

fn transshipment_routes(
    start: &Port,
    end: &Port,
    network: &NetworkSnapshot,
    config: &SearchConfig,
) -> Vec<SeaRoute> {
    let mut routes = Vec::new();

    for conn in network.active_connections() {
        let Some((service_a, service_b, hub)) = resolve_connection(conn, network) else {
            continue;
        };

        let forward = transship(start, end, service_a, service_b, hub, config);
        if let Some(route) = forward {
            routes.push(route.with_id(format!("trans-{}", conn.id)));
        }

        if config.bidirectional_connections && conn.service_a_id != conn.service_b_id {
            let reverse = transship(start, end, service_b, service_a, hub, config);
            if let Some(route) = reverse {
                routes.push(route.with_id(format!("trans-{}-rev", conn.id)));
            }
        }
    }

    routes
}

/// Look up both services and the interchange port of a connection.
///
/// Connections pointing at records missing from the snapshot are skipped.
fn resolve_connection<'a>(
    conn: &TransshipmentConnection,
    network: &'a NetworkSnapshot,
) -> Option<(&'a Arc<Service>, &'a Arc<Service>, &'a Port)> {
    let resolved = (
        network.service(&conn.service_a_id),
        network.service(&conn.service_b_id),
        network.port(&conn.port_id),
    );

    match resolved {
        (Some(a), Some(b), Some(hub)) => Some((a, b, hub)),
        _ => {
            debug!(
                connection = %conn.id,
                "Skipping connection with unknown service or port"
            );
            None
        }
    }
}

/// Build the route `first` start→hub then `second` hub→end, if both chains exist.
fn transship(
    start: &Port,
    end: &Port,
    first: &Arc<Service>,
    second: &Arc<Service>,
    hub: &Port,
    config: &SearchConfig,
) -> Option<SeaRoute> {
    let chain_a = scan_chain(first, &start.id, &hub.id)?;
    let chain_b = scan_chain(second, &hub.id, &end.id)?;

    let segment_a = RouteSegment::from_chain(first, start, hub, chain_a);
    let segment_b = RouteSegment::from_chain(second, hub, end, chain_b);
    let transit_time = segment_a
        .transit_time
        .saturating_add(segment_b.transit_time)
        .saturating_add(config.handling_buffer_days);

    Some(SeaRoute {
        id: String::new(),
        mode: SeaMode::Transshipment,
        transit_time,
        segments: vec![segment_a, segment_b],
        transshipment_port: Some(hub.clone()),
    })
}

impl SeaRoute {
    fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, PortType, ServiceLeg};

    fn leg(id: &str, from: &str, to: &str, days: u32) -> ServiceLeg {
        ServiceLeg::new(id, from, to, days, "c1")
    }

    fn service(id: &str, legs: Vec<ServiceLeg>) -> Service {
        Service::new(id, "c1", id, id.to_uppercase(), legs)
    }

    fn port(id: &str) -> Port {
        Port::new(id, id, id.to_uppercase(), "X", Coordinates::new(0.0, 0.0), PortType::Seaport)
    }

    fn pid(id: &str) -> PortId {
        PortId::new(id)
    }

    fn network(services: Vec<Service>, connections: Vec<TransshipmentConnection>) -> NetworkSnapshot {
        let ports = ["a", "b", "c", "d", "e"].into_iter().map(port).collect();
        NetworkSnapshot::new(ports, vec![], services, connections, vec![])
    }

    #[test]
    fn scan_chain_finds_contiguous_run() {
        let svc = service(
            "s1",
            vec![leg("1", "a", "b", 1), leg("2", "b", "c", 2), leg("3", "c", "d", 3)],
        );
        assert_eq!(scan_chain(&svc, &pid("b"), &pid("d")), Some(1..3));
        assert_eq!(scan_chain(&svc, &pid("a"), &pid("b")), Some(0..1));
    }

    #[test]
    fn scan_chain_needs_origin_before_destination() {
        let svc = service("s1", vec![leg("1", "a", "b", 1), leg("2", "b", "c", 2)]);
        assert_eq!(scan_chain(&svc, &pid("c"), &pid("a")), None);
        assert_eq!(scan_chain(&svc, &pid("b"), &pid("a")), None);
        assert_eq!(scan_chain(&svc, &pid("e"), &pid("c")), None);
    }

    #[test]
    fn scan_chain_uses_first_destination_after_origin() {
        // a -> b -> c -> b -> d: from a to b stops at the first arrival at b
        let svc = service(
            "loop",
            vec![
                leg("1", "a", "b", 5),
                leg("2", "b", "c", 1),
                leg("3", "c", "b", 1),
                leg("4", "b", "d", 1),
            ],
        );
        assert_eq!(scan_chain(&svc, &pid("a"), &pid("b")), Some(0..1));
        // Only the first departure from b is considered
        assert_eq!(scan_chain(&svc, &pid("b"), &pid("d")), Some(1..4));
    }

    #[test]
    fn scan_chain_does_not_validate_contiguity() {
        // Legs don't connect, but the scan simply walks them in order
        let svc = service("gap", vec![leg("1", "a", "b", 9), leg("2", "c", "d", 11)]);
        assert_eq!(scan_chain(&svc, &pid("a"), &pid("d")), Some(0..2));
    }

    #[test]
    fn direct_route_sums_sub_chain() {
        let net = network(
            vec![service(
                "s1",
                vec![leg("1", "a", "b", 6), leg("2", "b", "c", 23), leg("3", "c", "d", 2)],
            )],
            vec![],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, "direct-s1");
        assert_eq!(routes[0].mode, SeaMode::Direct);
        assert_eq!(routes[0].transit_time, 31);
        assert_eq!(routes[0].segments[0].legs.len(), 3);
        assert!(routes[0].transshipment_port.is_none());
    }

    #[test]
    fn transshipment_adds_handling_buffer() {
        let net = network(
            vec![
                service("s1", vec![leg("1", "a", "b", 4), leg("2", "b", "c", 5)]),
                service("s2", vec![leg("3", "c", "d", 11)]),
            ],
            vec![TransshipmentConnection::new("tc1", "s1", "s2", "c", true)],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.id, "trans-tc1");
        assert_eq!(route.mode, SeaMode::Transshipment);
        assert_eq!(route.transit_time, 9 + 11 + 3);
        assert_eq!(route.transshipment_port.as_ref().unwrap().id, pid("c"));
        assert_eq!(route.segments[0].destination.id, pid("c"));
        assert_eq!(route.segments[1].origin.id, pid("c"));
    }

    #[test]
    fn handling_buffer_is_configurable() {
        let net = network(
            vec![
                service("s1", vec![leg("1", "a", "c", 9)]),
                service("s2", vec![leg("2", "c", "d", 11)]),
            ],
            vec![TransshipmentConnection::new("tc1", "s1", "s2", "c", true)],
        );
        let config = SearchConfig::default().with_handling_buffer(0);

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &config);
        assert_eq!(routes[0].transit_time, 20);
    }

    #[test]
    fn inactive_connection_never_contributes() {
        let net = network(
            vec![
                service("s1", vec![leg("1", "a", "c", 9)]),
                service("s2", vec![leg("2", "c", "d", 11)]),
            ],
            vec![TransshipmentConnection::new("tc1", "s1", "s2", "c", false)],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert!(routes.is_empty());
    }

    #[test]
    fn connection_with_unknown_service_is_skipped() {
        let net = network(
            vec![service("s1", vec![leg("1", "a", "c", 9)])],
            vec![TransshipmentConnection::new("tc1", "s1", "ghost", "c", true)],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert!(routes.is_empty());
    }

    #[test]
    fn connection_direction_matters_by_default() {
        // s2 feeds s1 at c, but the connection says s1 feeds s2
        let net = network(
            vec![
                service("s1", vec![leg("1", "c", "d", 11)]),
                service("s2", vec![leg("2", "a", "c", 9)]),
            ],
            vec![TransshipmentConnection::new("tc1", "s1", "s2", "c", true)],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert!(routes.is_empty());

        let config = SearchConfig::default().with_bidirectional_connections(true);
        let routes = find_sea_routes(&port("a"), &port("d"), &net, &config);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, "trans-tc1-rev");
        assert_eq!(routes[0].segments[0].service.id.as_str(), "s2");
    }

    #[test]
    fn no_second_hop() {
        // a -s1-> b -s2-> c -s3-> d needs two interchanges: not found
        let net = network(
            vec![
                service("s1", vec![leg("1", "a", "b", 1)]),
                service("s2", vec![leg("2", "b", "c", 1)]),
                service("s3", vec![leg("3", "c", "d", 1)]),
            ],
            vec![
                TransshipmentConnection::new("tc1", "s1", "s2", "b", true),
                TransshipmentConnection::new("tc2", "s2", "s3", "c", true),
            ],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        assert!(routes.is_empty());
    }

    #[test]
    fn direct_before_transshipment() {
        let net = network(
            vec![
                service("s1", vec![leg("1", "a", "c", 2), leg("2", "c", "d", 30)]),
                service("s2", vec![leg("3", "c", "d", 1)]),
            ],
            vec![TransshipmentConnection::new("tc1", "s1", "s2", "c", true)],
        );

        let routes = find_sea_routes(&port("a"), &port("d"), &net, &SearchConfig::default());
        let ids: Vec<_> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["direct-s1", "trans-tc1"]);
    }
}
