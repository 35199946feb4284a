//! Domain error types.
//!
//! These errors describe inconsistencies in network data as it is ingested.
//! They are distinct from search errors and from source/IO errors.

use super::{ConnectionId, PortId, ServiceId};

/// Data consistency problems found in a network snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Service has no legs at all
    #[error("service {0} has no legs")]
    EmptyService(ServiceId),

    /// Consecutive legs of a service don't connect
    #[error("service {service} breaks its leg chain after leg {index}: arrives at {arrives} but next leg departs {departs}")]
    BrokenChain {
        service: ServiceId,
        index: usize,
        arrives: PortId,
        departs: PortId,
    },

    /// Inland connection whose hub is not an inland port
    #[error("inland connection {connection}: hub {hub} is not an inland port")]
    HubNotInland {
        connection: ConnectionId,
        hub: PortId,
    },

    /// Inland connection whose gateway is not a seaport
    #[error("inland connection {connection}: gateway {port} is not a seaport")]
    GatewayNotSeaport {
        connection: ConnectionId,
        port: PortId,
    },

    /// A record points at an id that isn't in the snapshot
    #[error("{record} references unknown {kind} {id}")]
    UnknownReference {
        record: String,
        kind: &'static str,
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyService(ServiceId::new("s1"));
        assert_eq!(err.to_string(), "service s1 has no legs");

        let err = DomainError::BrokenChain {
            service: ServiceId::new("s4"),
            index: 0,
            arrives: PortId::new("p8"),
            departs: PortId::new("p5"),
        };
        assert_eq!(
            err.to_string(),
            "service s4 breaks its leg chain after leg 0: arrives at p8 but next leg departs p5"
        );

        let err = DomainError::HubNotInland {
            connection: ConnectionId::new("ic1"),
            hub: PortId::new("p3"),
        };
        assert_eq!(
            err.to_string(),
            "inland connection ic1: hub p3 is not an inland port"
        );

        let err = DomainError::UnknownReference {
            record: "connection tc9".into(),
            kind: "service",
            id: "s99".into(),
        };
        assert_eq!(err.to_string(), "connection tc9 references unknown service s99");
    }
}
