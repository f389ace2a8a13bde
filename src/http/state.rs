//! Application state for the HTTP server.

use std::sync::Arc;

use crate::planner::RouteScheduler;
use crate::traits::TripStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<RouteScheduler>,
    /// The store the scheduler persists into, also served by the CRUD routes.
    pub store: Arc<dyn TripStore>,
}

impl AppState {
    pub fn new(scheduler: RouteScheduler) -> Self {
        let store = Arc::clone(scheduler.store());
        Self {
            scheduler: Arc::new(scheduler),
            store,
        }
    }
}
