//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info, warn};

use crate::discovery::{PotentialConnection, discover_connections};
use crate::domain::{NetworkSnapshot, PortId, Service};
use crate::network::{NetworkError, NetworkStatus};
use crate::planner::{RoutePlanner, SearchConfig, SearchError, SearchRequest, SearchResult};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/network", get(network_status))
        .route("/api/network/refresh", post(refresh_network))
        .route("/api/ports", get(list_ports))
        .route("/api/ports/:id", get(port_detail))
        .route("/api/routes/search", post(search_routes))
        .route("/api/connections/discover", get(discover))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn network_status(State(state): State<AppState>) -> Json<NetworkStatus> {
    Json(state.network.status().await)
}

/// Reload the network from its sources.
async fn refresh_network(State(state): State<AppState>) -> Result<Json<NetworkStatus>, AppError> {
    let status = state.network.refresh().await?;
    state.cache.invalidate_all();
    Ok(Json(status))
}

/// All ports and hubs, sorted by name.
async fn list_ports(State(state): State<AppState>) -> Json<PortsResponse> {
    let (snapshot, _) = state.network.snapshot().await;
    let mut ports = snapshot.ports().to_vec();
    ports.sort_by(|a, b| a.name.cmp(&b.name));
    Json(PortsResponse { ports })
}

/// One port with the services calling there and its active interchanges.
async fn port_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PortDetailResponse>, AppError> {
    let (snapshot, _) = state.network.snapshot().await;
    let id = PortId::new(id);

    let port = snapshot.port(&id).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown port: {id}"),
    })?;

    let services = snapshot
        .services_calling_at(&id)
        .into_iter()
        .map(|service| port_service_view(&snapshot, service, &id))
        .collect();

    let connections = snapshot
        .active_connections_at(&id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(PortDetailResponse {
        port: port.clone(),
        services,
        connections,
    }))
}

fn port_service_view(snapshot: &NetworkSnapshot, service: &Arc<Service>, port: &PortId) -> PortServiceView {
    let inbound_from = service
        .inbound_leg(port)
        .and_then(|leg| snapshot.port(&leg.origin_port_id))
        .cloned();
    let outbound_to = service
        .outbound_leg(port)
        .and_then(|leg| snapshot.port(&leg.destination_port_id))
        .cloned();

    PortServiceView {
        service: Arc::clone(service),
        inbound_from,
        outbound_to,
    }
}

/// Search for ranked routes between two locations.
async fn search_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteSearchResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteSearchRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid search request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = SearchRequest::new(req.origin, req.destination);
    request.validate()?;

    let (snapshot, version) = state.network.snapshot().await;

    let cached = state
        .cache
        .get(version, &request.origin, &request.destination)
        .await;
    let (result, cached) = match cached {
        Some(result) => (result, true),
        None => {
            let result = Arc::new(run_search(snapshot, Arc::clone(&state.config), request.clone()).await?);
            state
                .cache
                .insert(version, request.origin.clone(), request.destination.clone(), Arc::clone(&result))
                .await;
            (result, false)
        }
    };

    let mut routes = req.filter.apply(&result.routes);
    if let Some(max) = state.config.max_results {
        routes.truncate(max);
    }

    info!(
        user = req.user_id.as_deref().unwrap_or("guest"),
        origin = %request.origin,
        destination = %request.destination,
        routes = routes.len(),
        cached,
        "Route search"
    );

    Ok(Json(RouteSearchResponse {
        routes,
        pairs_evaluated: result.pairs_evaluated,
        cached,
    }))
}

/// Run the planner off the async runtime, giving up after the configured timeout.
///
/// Returns every ranked route; the caller applies `max_results` after
/// filtering.
///
/// On timeout the search is abandoned, not cancelled: the blocking task
/// keeps its thread until the planner returns.
async fn run_search(
    network: Arc<NetworkSnapshot>,
    config: Arc<SearchConfig>,
    request: SearchRequest,
) -> Result<SearchResult, AppError> {
    let timeout = config.timeout();
    let task = tokio::task::spawn_blocking(move || RoutePlanner::new(&network, &config).search_all(&request));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => Ok(result?),
        Ok(Err(e)) => Err(AppError::Internal {
            message: format!("search task failed: {e}"),
        }),
        Err(_) => Err(SearchError::Timeout.into()),
    }
}

/// Same-carrier service pairs that could be connected.
async fn discover(State(state): State<AppState>) -> Json<Vec<PotentialConnection>> {
    let (snapshot, _) = state.network.snapshot().await;
    Json(discover_connections(&snapshot))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Timeout { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::InvalidEndpoint(_) => AppError::BadRequest { message },
            SearchError::UnknownLocation(_) => AppError::NotFound { message },
            SearchError::Timeout => AppError::Timeout { message },
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Timeout { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
