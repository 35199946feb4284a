//! Identifier types.
//!
//! Every record in the carrier network is keyed by an opaque string id
//! assigned by the master-data store. Each kind of record gets its own
//! newtype so a service id can never be passed where a port id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Id of a seaport or inland hub.
    PortId
);
string_id!(
    /// Id of an ocean carrier.
    CarrierId
);
string_id!(
    /// Id of a scheduled carrier service (a loop of legs).
    ServiceId
);
string_id!(
    /// Id of a single leg within a service.
    LegId
);
string_id!(
    /// Id of a transshipment or inland connection record.
    ConnectionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_id() {
        assert_eq!(PortId::new("p1").to_string(), "p1");
        assert_eq!(ServiceId::from("s1").as_str(), "s1");
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", PortId::new("p3")), "PortId(p3)");
        assert_eq!(format!("{:?}", CarrierId::new("c1")), "CarrierId(c1)");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PortId::new("p_chi")).unwrap();
        assert_eq!(json, "\"p_chi\"");

        let id: ServiceId = serde_json::from_str("\"s9\"").unwrap();
        assert_eq!(id, ServiceId::new("s9"));
    }
}
