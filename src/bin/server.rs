//! Trip planner HTTP server.
//!
//! # Environment Variables
//!
//! - `GEOAPIFY_API_KEY`: provider key (required)
//! - `GEOAPIFY_BASE_URL`: provider root (default: https://api.geoapify.com)
//! - `GEOAPIFY_TIMEOUT_SECS`: per-call timeout (default: 10)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `LOG_LEVEL`: tracing filter directive (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use trip_planner::config::AppConfig;
use trip_planner::geoapify::GeoapifyClient;
use trip_planner::http::{AppState, create_router};
use trip_planner::planner::RouteScheduler;
use trip_planner::store::InMemoryTripStore;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .init();

    info!("Starting trip planner");

    // The blocking reqwest client owns its own runtime, so it has to be
    // built before tokio starts.
    let provider = Arc::new(GeoapifyClient::new(config.geoapify())?);
    let store = Arc::new(InMemoryTripStore::new());
    let scheduler = RouteScheduler::new(provider.clone(), provider, store);
    let app = create_router(AppState::new(scheduler));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tokio::runtime::Runtime::new()?.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                tokio::signal::ctrl_c().await.ok();
                info!("Shutting down");
            })
            .await?;

        Ok::<(), anyhow::Error>(())
    })
}
