use std::process::ExitCode;

use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use route_server::config::AppConfig;
use route_server::network::{NetworkRegistry, SourceChain};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Load the network (falls back to built-in defaults)
    let chain = SourceChain::from_config(&config.network)?;
    let network = NetworkRegistry::load(chain, config.network.reject_malformed_services).await?;
    let status = network.status().await;
    info!(
        source = %status.source,
        ports = status.ports,
        services = status.services,
        connections = status.connections,
        inland_connections = status.inland_connections,
        "Network ready"
    );

    // Spawn background task to reload the network
    if let Some(every) = config.network.refresh_interval {
        let network_refresh = network.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                if let Err(e) = network_refresh.refresh().await {
                    warn!(error = %e, "Failed to refresh network");
                }
            }
        });
    }

    let state = AppState::new(network, config.search, &config.cache);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Route discovery server listening on http://{}", config.bind_addr);
    info!("  GET  /health                   - Health check");
    info!("  GET  /api/network              - Network source and counts");
    info!("  POST /api/network/refresh      - Reload the network");
    info!("  GET  /api/ports                - List ports");
    info!("  GET  /api/ports/:id            - Port detail");
    info!("  POST /api/routes/search        - Search routes");
    info!("  GET  /api/connections/discover - Potential transshipment connections");

    axum::serve(listener, app).await?;
    Ok(())
}
