//! axum HTTP surface.
//!
//! ```text
//! POST   /calculate_route/   route + duty log sheets
//! GET    /trips/             list trip records
//! POST   /trips/             create
//! GET    /trips/{id}/        retrieve
//! PUT    /trips/{id}/        replace
//! PATCH  /trips/{id}/        partial update
//! DELETE /trips/{id}/        delete
//! GET    /health             liveness
//! ```
//!
//! Route calculation blocks on outbound HTTP, so handlers hand it to
//! `spawn_blocking`. Every error body is `{"error": "<message>"}`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
