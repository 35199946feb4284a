//! Discovery of potential transshipment connections.
//!
//! Two services run by the same carrier that call at a common port could
//! exchange cargo there. This lists every such pair with the shared ports,
//! so an operator can decide which interchanges to activate.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{NetworkSnapshot, Port, Service};

/// A port both services call at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonPort {
    pub port: Port,
    /// An active connection already pairs the two services here
    pub connected: bool,
}

/// Two same-carrier services that share at least one port.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialConnection {
    pub service_a: Arc<Service>,
    pub service_b: Arc<Service>,
    /// In the order the first service reaches them
    pub common_ports: Vec<CommonPort>,
}

/// Find every same-carrier service pair with ports in common.
///
/// Pairs are unordered and listed once, in snapshot order. Ports missing
/// from the snapshot are left out, and a pair is only listed if at least
/// one common port remains.
pub fn discover_connections(network: &NetworkSnapshot) -> Vec<PotentialConnection> {
    let services = network.services();
    let mut potentials = Vec::new();

    for (i, service_a) in services.iter().enumerate() {
        for service_b in &services[i + 1..] {
            if service_a.carrier_id != service_b.carrier_id {
                continue;
            }

            let ports_b = service_b.ports();
            let common_ports: Vec<CommonPort> = service_a
                .ports()
                .into_iter()
                .filter(|id| ports_b.contains(id))
                .filter_map(|id| network.port(id))
                .map(|port| CommonPort {
                    connected: is_connected(network, service_a, service_b, port),
                    port: port.clone(),
                })
                .collect();

            if !common_ports.is_empty() {
                potentials.push(PotentialConnection {
                    service_a: Arc::clone(service_a),
                    service_b: Arc::clone(service_b),
                    common_ports,
                });
            }
        }
    }

    potentials
}

fn is_connected(network: &NetworkSnapshot, a: &Service, b: &Service, port: &Port) -> bool {
    network
        .active_connections_at(&port.id)
        .iter()
        .any(|conn| conn.pairs(&a.id, &b.id))
}
