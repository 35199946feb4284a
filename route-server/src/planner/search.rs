//! Route search: composing resolved endpoints with sea routes.
//!
//! Every start seaport is paired with every end seaport. For each pair the
//! sea route finder runs, and its candidates are wrapped with the inland
//! legs that led to the pair. The combined list is ranked by total transit
//! time.

use tracing::debug;

use crate::domain::{NetworkSnapshot, Port, PortId, RouteResult, RouteType};

use super::config::SearchConfig;
use super::rank::rank_routes;
use super::resolve::{SeaEndpoint, resolve_end_points, resolve_start_points};
use super::sea::{SeaRoute, find_sea_routes};

/// Error from route search.
///
/// Finding no route is not an error: the search succeeds with no routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin and destination are the same location
    #[error("origin and destination are both {0}")]
    InvalidEndpoint(PortId),

    /// A location id that isn't in the network snapshot
    #[error("unknown location: {0}")]
    UnknownLocation(PortId),

    /// Search timed out
    #[error("search timed out")]
    Timeout,
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchRequest {
    /// Port of loading or inland origin.
    pub origin: PortId,

    /// Port of discharge or inland destination.
    pub destination: PortId,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: impl Into<PortId>, destination: impl Into<PortId>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Validate the search request.
    ///
    /// Only checks what can be known without the network.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidEndpoint(self.origin.clone()));
        }
        Ok(())
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Found routes, fastest first.
    pub routes: Vec<RouteResult>,

    /// Number of (start, end) seaport pairs searched.
    pub pairs_evaluated: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            pairs_evaluated: 0,
        }
    }
}

/// Route planner over one network snapshot.
///
/// Holds no state between searches; any number of planners may share a
/// snapshot.
pub struct RoutePlanner<'a> {
    network: &'a NetworkSnapshot,
    config: &'a SearchConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a NetworkSnapshot, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Search for routes.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if origin and destination are the same
    /// - `UnknownLocation` if either endpoint, or a gateway reached through
    ///   an inland connection, is missing from the snapshot
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let mut result = self.search_all(request)?;
        if let Some(max) = self.config.max_results {
            result.routes.truncate(max);
        }
        Ok(result)
    }

    /// Search for routes, keeping every ranked route regardless of
    /// `max_results`.
    ///
    /// For callers that narrow the list further before limiting it.
    pub fn search_all(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let origin = self.lookup(&request.origin)?;
        let destination = self.lookup(&request.destination)?;

        let starts = resolve_start_points(origin, self.network, self.config)?;
        let ends = resolve_end_points(destination, self.network, self.config)?;

        let mut routes = Vec::new();
        let mut pairs_evaluated = 0;

        for start in &starts {
            for end in &ends {
                if start.port.id == end.port.id {
                    continue;
                }
                pairs_evaluated += 1;

                let sea_routes = find_sea_routes(start.port, end.port, self.network, self.config);
                routes.extend(sea_routes.into_iter().map(|sea| compose(start, end, sea)));
            }
        }

        let routes = rank_routes(routes);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            start_points = starts.len(),
            end_points = ends.len(),
            pairs_evaluated,
            routes = routes.len(),
            "Route search complete"
        );

        Ok(SearchResult {
            routes,
            pairs_evaluated,
        })
    }

    fn lookup(&self, id: &PortId) -> Result<&'a Port, SearchError> {
        self.network
            .port(id)
            .ok_or_else(|| SearchError::UnknownLocation(id.clone()))
    }
}

/// Find ranked routes from `origin` to `destination`.
///
/// A pure function of its inputs: the snapshot is only read.
pub fn find_routes(
    origin: &PortId,
    destination: &PortId,
    network: &NetworkSnapshot,
    config: &SearchConfig,
) -> Result<Vec<RouteResult>, SearchError> {
    let request = SearchRequest::new(origin.clone(), destination.clone());
    RoutePlanner::new(network, config)
        .search(&request)
        .map(|result| result.routes)
}

/// Wrap a sea route with the inland legs of its endpoints.
fn compose(start: &SeaEndpoint<'_>, end: &SeaEndpoint<'_>, sea: SeaRoute) -> RouteResult {
    let pre = start.inland_leg.clone();
    let on = end.inland_leg.clone();

    let total_transit_time = [
        pre.as_ref().map_or(0, |leg| leg.transit_time),
        sea.transit_time,
        on.as_ref().map_or(0, |leg| leg.transit_time),
    ]
    .into_iter()
    .fold(0u32, u32::saturating_add);

    let has_inland_legs = pre.is_some() || on.is_some();
    let route_type = if has_inland_legs {
        RouteType::Intermodal
    } else {
        RouteType::from(sea.mode)
    };

    let id = format!(
        "{}{}{}",
        if pre.is_some() { "in-" } else { "" },
        sea.id,
        if on.is_some() { "-out" } else { "" }
    );

    RouteResult {
        id,
        route_type,
        sea_mode: sea.mode,
        has_inland_legs,
        total_transit_time,
        pre_carriage: pre,
        segments: sea.segments,
        on_carriage: on,
        transshipment_port: sea.transshipment_port,
    }
}
