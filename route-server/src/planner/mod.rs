//! Route planner: direct, transshipment and intermodal route discovery.
//!
//! Answers: "which ways can cargo get from this origin to this destination,
//! and how long does each take?"
//!
//! The search runs in three stages. Inland hubs are resolved to the seaports
//! they connect to; each start/end seaport pair is searched for direct and
//! single-transshipment sea routes; the results are wrapped with their inland
//! legs and ranked by total transit time.

mod config;
mod rank;
mod resolve;
mod sea;
mod search;


pub use config::{DEFAULT_HANDLING_BUFFER_DAYS, SearchConfig};
pub use rank::{RouteFilter, rank_routes};
pub use resolve::{SeaEndpoint, resolve_end_points, resolve_start_points};
pub use sea::{SeaRoute, find_sea_routes, scan_chain};
pub use search::{RoutePlanner, SearchError, SearchRequest, SearchResult, find_routes};
