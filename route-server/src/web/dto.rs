//! Data transfer objects for web requests and responses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Port, RouteResult, Service, TransshipmentConnection};
use crate::planner::RouteFilter;

/// Request to search for routes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSearchRequest {
    /// Origin port or inland hub id
    pub origin: String,

    /// Destination port or inland hub id
    pub destination: String,

    /// Optional narrowing of the ranked results
    #[serde(default)]
    pub filter: RouteFilter,

    /// Who asked, for the search log
    pub user_id: Option<String>,
}

/// Response from route search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSearchResponse {
    /// Routes, fastest first
    pub routes: Vec<RouteResult>,

    /// Number of (start, end) seaport pairs searched
    pub pairs_evaluated: usize,

    /// Whether the unfiltered result came from the cache
    pub cached: bool,
}

/// Port listing.
#[derive(Debug, Serialize)]
pub struct PortsResponse {
    pub ports: Vec<Port>,
}

/// Service as seen from one port.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortServiceView {
    pub service: Arc<Service>,

    /// Port the service arrives from, if it arrives here
    pub inbound_from: Option<Port>,

    /// Port the service sails to next, if it departs here
    pub outbound_to: Option<Port>,
}

/// Port with the services and interchanges that use it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDetailResponse {
    pub port: Port,
    pub services: Vec<PortServiceView>,
    pub connections: Vec<TransshipmentConnection>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
