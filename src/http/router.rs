//! Router configuration for the HTTP API.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Browser front-ends call this from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/calculate_route/", post(handlers::calculate_route))
        .route(
            "/trips/",
            get(handlers::list_trips).post(handlers::create_trip),
        )
        .route(
            "/trips/{id}/",
            get(handlers::get_trip)
                .put(handlers::update_trip)
                .patch(handlers::patch_trip)
                .delete(handlers::delete_trip),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
