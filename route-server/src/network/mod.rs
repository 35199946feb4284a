//! Carrier network sources and the shared current snapshot.
//!
//! The network comes from the first source that answers: the network API,
//! a JSON file, or the built-in defaults. The registry keeps the loaded
//! snapshot and reloads it on demand.

mod client;
mod defaults;
mod error;
mod registry;
mod source;

pub use client::{NetworkClient, NetworkClientConfig};
pub use defaults::default_network;
pub use error::NetworkError;
pub use registry::{NetworkRegistry, NetworkStatus};
pub use source::{DataSource, LoadedNetwork, NetworkConfig, NetworkProvider, NetworkSource, SourceChain};
