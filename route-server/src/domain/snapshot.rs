//! Network snapshots.
//!
//! `NetworkData` is the wire form of the carrier network as supplied by a
//! data source. `NetworkSnapshot` is the immutable, indexed view handed to
//! the route search; building one never fails, and [`NetworkSnapshot::validate`]
//! reports anything suspicious without altering the data.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
    Carrier, DomainError, InlandConnection, Port, PortId, Service, ServiceId,
    TransshipmentConnection,
};

/// The four network collections (plus carriers) as exchanged over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkData {
    pub ports: Vec<Port>,
    #[serde(default)]
    pub carriers: Vec<Carrier>,
    pub services: Vec<Service>,
    pub connections: Vec<TransshipmentConnection>,
    #[serde(default)]
    pub inland_connections: Vec<InlandConnection>,
}

impl NetworkData {
    /// Drop services whose legs don't form a contiguous chain.
    ///
    /// Returns the problems that caused each removal.
    pub fn reject_malformed_services(&mut self) -> Vec<DomainError> {
        let mut rejected = Vec::new();
        self.services.retain(|service| match service.check_contiguity() {
            Ok(()) => true,
            Err(e) => {
                rejected.push(e);
                false
            }
        });
        rejected
    }
}

/// Immutable, indexed view of the carrier network.
///
/// Lookups by id return the first record with that id, in list order.
#[derive(Debug, Clone, Default)]
pub struct NetworkSnapshot {
    ports: Vec<Port>,
    carriers: Vec<Carrier>,
    services: Vec<Arc<Service>>,
    connections: Vec<TransshipmentConnection>,
    inland_connections: Vec<InlandConnection>,
    port_index: HashMap<PortId, usize>,
    service_index: HashMap<ServiceId, usize>,
}

impl NetworkSnapshot {
    /// Build a snapshot, indexing ports and services by id.
    pub fn new(
        ports: Vec<Port>,
        carriers: Vec<Carrier>,
        services: Vec<Service>,
        connections: Vec<TransshipmentConnection>,
        inland_connections: Vec<InlandConnection>,
    ) -> Self {
        let mut port_index = HashMap::with_capacity(ports.len());
        for (idx, port) in ports.iter().enumerate() {
            port_index.entry(port.id.clone()).or_insert(idx);
        }

        let mut service_index = HashMap::with_capacity(services.len());
        for (idx, service) in services.iter().enumerate() {
            service_index.entry(service.id.clone()).or_insert(idx);
        }

        Self {
            ports,
            carriers,
            services: services.into_iter().map(Arc::new).collect(),
            connections,
            inland_connections,
            port_index,
            service_index,
        }
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    pub fn services(&self) -> &[Arc<Service>] {
        &self.services
    }

    pub fn connections(&self) -> &[TransshipmentConnection] {
        &self.connections
    }

    pub fn inland_connections(&self) -> &[InlandConnection] {
        &self.inland_connections
    }

    /// Look up a port by id.
    pub fn port(&self, id: &PortId) -> Option<&Port> {
        self.port_index.get(id).map(|&idx| &self.ports[idx])
    }

    /// Look up a service by id.
    pub fn service(&self, id: &ServiceId) -> Option<&Arc<Service>> {
        self.service_index.get(id).map(|&idx| &self.services[idx])
    }

    /// Transshipment connections that take part in route discovery.
    pub fn active_connections(&self) -> impl Iterator<Item = &TransshipmentConnection> {
        self.connections.iter().filter(|c| c.is_active)
    }

    /// Services with any leg touching `port`, in snapshot order.
    pub fn services_calling_at(&self, port: &PortId) -> Vec<&Arc<Service>> {
        self.services.iter().filter(|s| s.calls_at(port)).collect()
    }

    /// Active connections whose interchange is `port`.
    pub fn active_connections_at(&self, port: &PortId) -> Vec<&TransshipmentConnection> {
        self.active_connections()
            .filter(|c| &c.port_id == port)
            .collect()
    }

    /// Inland links whose hub is `hub`, in snapshot order.
    pub fn inland_links_from(&self, hub: &PortId) -> impl Iterator<Item = &InlandConnection> {
        self.inland_connections.iter().filter(move |ic| &ic.hub_id == hub)
    }

    /// Report data problems without changing anything.
    ///
    /// Checks leg contiguity of every service, the port types at both ends of
    /// inland connections, and that connections only reference known records.
    pub fn validate(&self) -> Vec<DomainError> {
        let mut issues = Vec::new();

        for service in &self.services {
            if let Err(e) = service.check_contiguity() {
                issues.push(e);
            }
        }

        for conn in &self.connections {
            let record = format!("connection {}", conn.id);
            for service_id in [&conn.service_a_id, &conn.service_b_id] {
                if self.service(service_id).is_none() {
                    issues.push(DomainError::UnknownReference {
                        record: record.clone(),
                        kind: "service",
                        id: service_id.to_string(),
                    });
                }
            }
            if self.port(&conn.port_id).is_none() {
                issues.push(DomainError::UnknownReference {
                    record,
                    kind: "port",
                    id: conn.port_id.to_string(),
                });
            }
        }

        for link in &self.inland_connections {
            let record = format!("inland connection {}", link.id);
            match self.port(&link.hub_id) {
                None => issues.push(DomainError::UnknownReference {
                    record: record.clone(),
                    kind: "port",
                    id: link.hub_id.to_string(),
                }),
                Some(hub) if !hub.is_inland() => issues.push(DomainError::HubNotInland {
                    connection: link.id.clone(),
                    hub: link.hub_id.clone(),
                }),
                Some(_) => {}
            }
            match self.port(&link.port_id) {
                None => issues.push(DomainError::UnknownReference {
                    record,
                    kind: "port",
                    id: link.port_id.to_string(),
                }),
                Some(gateway) if !gateway.is_seaport() => {
                    issues.push(DomainError::GatewayNotSeaport {
                        connection: link.id.clone(),
                        port: link.port_id.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        issues
    }
}

impl From<NetworkData> for NetworkSnapshot {
    fn from(data: NetworkData) -> Self {
        Self::new(
            data.ports,
            data.carriers,
            data.services,
            data.connections,
            data.inland_connections,
        )
    }
}
