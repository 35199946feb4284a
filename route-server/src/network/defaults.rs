//! Built-in carrier network.
//!
//! Used when neither the network API nor a network file is available, and
//! as a realistic fixture in tests. Transit times are in days.

use crate::domain::{
    Carrier, Coordinates, InlandConnection, NetworkData, Port, PortType, Service, ServiceLeg,
    TransportMode, TransshipmentConnection,
};

fn carrier(id: &str, name: &str, code: &str, color: &str) -> Carrier {
    Carrier {
        id: id.into(),
        name: name.to_string(),
        code: code.to_string(),
        color: color.to_string(),
        logo: None,
    }
}

fn seaport(id: &str, name: &str, code: &str, country: &str, lon: f64, lat: f64) -> Port {
    Port::new(id, name, code, country, Coordinates::new(lon, lat), PortType::Seaport)
}

fn inland(id: &str, name: &str, code: &str, country: &str, lon: f64, lat: f64) -> Port {
    Port::new(id, name, code, country, Coordinates::new(lon, lat), PortType::Inland)
}

/// Build a service from `(leg id, origin, destination, days)` tuples.
fn service(id: &str, carrier: &str, name: &str, code: &str, legs: &[(&str, &str, &str, u32)]) -> Service {
    let legs = legs
        .iter()
        .map(|&(leg_id, from, to, days)| ServiceLeg::new(leg_id, from, to, days, carrier))
        .collect();
    Service::new(id, carrier, name, code, legs)
}

/// The default network: major Asia, Europe and Americas gateways, nine
/// services, four transshipment connections and seven inland links.
pub fn default_network() -> NetworkData {
    NetworkData {
        ports: default_ports(),
        carriers: vec![
            carrier("c1", "Maersk Line", "MSK", "#3b82f6"),
            carrier("c2", "MSC", "MSC", "#fbbf24"),
            carrier("c3", "CMA CGM", "CMA", "#ef4444"),
            carrier("c4", "Hapag-Lloyd", "HPL", "#f97316"),
            carrier("c5", "Evergreen", "EMC", "#10b981"),
            carrier("c6", "ONE", "ONE", "#ec4899"),
        ],
        services: default_services(),
        connections: vec![
            TransshipmentConnection::new("tc1", "s1", "s5", "p3", true), // AE1 -> SA1 at Rotterdam
            TransshipmentConnection::new("tc2", "s3", "s4", "p3", true), // FAL1 -> AT1 at Rotterdam
            TransshipmentConnection::new("tc3", "s6", "s9", "p15", true), // AE2 -> AX1 at Antwerp
            TransshipmentConnection::new("tc4", "s1", "s8", "p2", true), // AE1 -> MED1 at Singapore
        ],
        inland_connections: vec![
            // US rail
            InlandConnection::new("ic1", "p_chi", "p8", TransportMode::Rail, 4), // Chicago ↔ New York
            InlandConnection::new("ic2", "p_chi", "p4", TransportMode::Rail, 5), // Chicago ↔ Los Angeles
            InlandConnection::new("ic3", "p_chi", "p23", TransportMode::Rail, 4), // Chicago ↔ Norfolk
            // Europe rail
            InlandConnection::new("ic4", "p_muc", "p5", TransportMode::Rail, 1), // Munich ↔ Hamburg
            InlandConnection::new("ic5", "p_muc", "p3", TransportMode::Rail, 2), // Munich ↔ Rotterdam
            // China truck
            InlandConnection::new("ic6", "p_yiw", "p11", TransportMode::Truck, 1), // Yiwu ↔ Ningbo
            InlandConnection::new("ic7", "p_yiw", "p1", TransportMode::Truck, 1), // Yiwu ↔ Shanghai
        ],
    }
}

fn default_ports() -> Vec<Port> {
    vec![
        // Asia
        seaport("p1", "Shanghai", "CNSHA", "China", 121.4737, 31.2304),
        seaport("p2", "Singapore", "SGSIN", "Singapore", 103.8198, 1.3521),
        seaport("p6", "Busan", "KRPUS", "South Korea", 129.0756, 35.1796),
        seaport("p9", "Tokyo", "JPTYO", "Japan", 139.6917, 35.6895),
        seaport("p11", "Ningbo", "CNNBG", "China", 121.6186, 29.8683),
        seaport("p12", "Shenzhen", "CNSZX", "China", 114.1095, 22.5431),
        seaport("p13", "Hong Kong", "HKHKG", "Hong Kong", 114.1694, 22.3193),
        seaport("p14", "Port Klang", "MYPKG", "Malaysia", 101.3928, 3.0),
        seaport("p24", "Kaohsiung", "TWKHH", "Taiwan", 120.3120, 22.6273),
        // Middle East
        seaport("p7", "Jebel Ali", "AEJEA", "UAE", 55.0273, 25.0228),
        // Europe
        seaport("p3", "Rotterdam", "NLRTM", "Netherlands", 4.47917, 51.9225),
        seaport("p5", "Hamburg", "DEHAM", "Germany", 9.9937, 53.5511),
        seaport("p15", "Antwerp", "BEANR", "Belgium", 4.4025, 51.2194),
        seaport("p16", "Felixstowe", "GBFXT", "UK", 1.3513, 51.9614),
        seaport("p17", "Le Havre", "FRLEH", "France", 0.1079, 49.4944),
        seaport("p20", "Valencia", "ESVLC", "Spain", -0.3763, 39.4699),
        seaport("p22", "Barcelona", "ESBCN", "Spain", 2.1734, 41.3851),
        // North America
        seaport("p4", "Los Angeles", "USLAX", "USA", -118.2437, 34.0522),
        seaport("p8", "New York", "USNYC", "USA", -74.006, 40.7128),
        seaport("p18", "Vancouver", "CAVAN", "Canada", -123.1207, 49.2827),
        seaport("p19", "Savannah", "USSAV", "USA", -81.0998, 32.0835),
        seaport("p21", "Oakland", "USOAK", "USA", -122.2711, 37.8044),
        seaport("p23", "Norfolk", "USORF", "USA", -76.2859, 36.8508),
        // South America
        seaport("p10", "Santos", "BRSSZ", "Brazil", -46.308, -23.961),
        // Inland hubs
        inland("p_chi", "Chicago", "USCHI", "USA", -87.6298, 41.8781),
        inland("p_muc", "Munich", "DEMUC", "Germany", 11.5820, 48.1351),
        inland("p_yiw", "Yiwu", "CNYIW", "China", 120.0751, 29.3151),
        inland("p_del", "New Delhi", "INDEL", "India", 77.2090, 28.6139),
    ]
}

fn default_services() -> Vec<Service> {
    vec![
        service("s1", "c1", "AE1 (Asia-Europe 1)", "AE1", &[
            ("l1", "p1", "p2", 6),   // SHA -> SIN
            ("l2", "p2", "p3", 23),  // SIN -> RTM
            ("l3", "p3", "p5", 2),   // RTM -> HAM
        ]),
        service("s2", "c2", "TP1 (Transpacific 1)", "TP1", &[
            ("l4", "p1", "p6", 3),   // SHA -> PUS
            ("l5", "p6", "p4", 12),  // PUS -> LAX
        ]),
        service("s3", "c3", "FAL1 (French Asia Line)", "FAL1", &[
            ("l6", "p9", "p1", 4),   // TYO -> SHA
            ("l7", "p1", "p2", 6),   // SHA -> SIN
            ("l8", "p2", "p7", 10),  // SIN -> JEA
            ("l9", "p7", "p3", 18),  // JEA -> RTM
        ]),
        // Two origins into New York; not a contiguous rotation
        service("s4", "c4", "AT1 (Atlantic 1)", "AT1", &[
            ("l10", "p3", "p8", 9),  // RTM -> NYC
            ("l11", "p5", "p8", 11), // HAM -> NYC
        ]),
        service("s5", "c1", "SA1 (South America 1)", "SA1", &[
            ("l12", "p3", "p10", 18), // RTM -> SSZ
        ]),
        service("s6", "c2", "AE2 (Lion Service)", "AE2", &[
            ("l13", "p11", "p12", 2), // NBG -> SZX
            ("l14", "p12", "p14", 4), // SZX -> PKG
            ("l15", "p14", "p15", 22), // PKG -> ANR
            ("l16", "p15", "p17", 2), // ANR -> LEH
        ]),
        service("s7", "c3", "TP2 (Pearl River Express)", "TP2", &[
            ("l17", "p13", "p12", 1), // HKG -> SZX
            ("l18", "p12", "p18", 16), // SZX -> VAN
            ("l19", "p18", "p21", 4), // VAN -> OAK
        ]),
        service("s8", "c1", "MED1 (AE12)", "MED1", &[
            ("l20", "p2", "p7", 9),   // SIN -> JEA
            ("l21", "p7", "p22", 14), // JEA -> BCN
            ("l22", "p22", "p20", 2), // BCN -> VLC
        ]),
        service("s9", "c4", "AX1 (Atlantic Express)", "AX1", &[
            ("l23", "p15", "p23", 11), // ANR -> ORF
            ("l24", "p23", "p19", 3), // ORF -> SAV
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, NetworkSnapshot, PortId};

    #[test]
    fn default_network_shape() {
        let data = default_network();
        assert_eq!(data.ports.len(), 28);
        assert_eq!(data.carriers.len(), 6);
        assert_eq!(data.services.len(), 9);
        assert_eq!(data.connections.len(), 4);
        assert_eq!(data.inland_connections.len(), 7);
    }

    #[test]
    fn inland_hubs_are_marked() {
        let snapshot = NetworkSnapshot::from(default_network());
        for hub in ["p_chi", "p_muc", "p_yiw", "p_del"] {
            assert!(snapshot.port(&PortId::new(hub)).unwrap().is_inland(), "{hub}");
        }
    }

    #[test]
    fn only_atlantic_service_is_non_contiguous() {
        let issues = NetworkSnapshot::from(default_network()).validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            DomainError::BrokenChain { service, .. } if service.as_str() == "s4"
        ));
    }
}
