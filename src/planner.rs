//! Route scheduler: addresses in, route plus duty log sheets out.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::PlanError;
use crate::polyline::{GeoPoint, Polyline};
use crate::schedule::{self, LogSheet, METERS_PER_MILE, SECONDS_PER_HOUR, ScheduleOptions};
use crate::traits::{Geocoder, RouteProvider, TripDraft, TripStore};

/// A validated route calculation request.
pub type TripRequest = TripDraft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Driven path, `[lat, lng]` per point.
    pub coordinates: Vec<GeoPoint>,
    pub fuel_stop_coordinates: Vec<GeoPoint>,
    pub distance_miles: f64,
    /// Driving time plus the fixed handling overhead.
    pub total_hours: f64,
    pub log_sheets: Vec<LogSheet>,
}

pub struct RouteScheduler {
    geocoder: Arc<dyn Geocoder>,
    router: Arc<dyn RouteProvider>,
    store: Arc<dyn TripStore>,
    options: ScheduleOptions,
}

impl RouteScheduler {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        router: Arc<dyn RouteProvider>,
        store: Arc<dyn TripStore>,
    ) -> Self {
        Self {
            geocoder,
            router,
            store,
            options: ScheduleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScheduleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &Arc<dyn TripStore> {
        &self.store
    }

    /// Plans the trip with the duty clock starting now.
    pub fn calculate_route(&self, request: &TripRequest) -> Result<RouteResult, PlanError> {
        self.calculate_route_at(request, Local::now().naive_local())
    }

    /// Plans the trip with the duty clock starting at `start`.
    ///
    /// All-or-nothing: any geocoding or routing failure aborts before a trip
    /// record is written. The record write itself is best-effort.
    pub fn calculate_route_at(
        &self,
        request: &TripRequest,
        start: NaiveDateTime,
    ) -> Result<RouteResult, PlanError> {
        let stops = self.resolve_stops(request)?;

        let route = self.router.route(&stops).map_err(|err| {
            let err = PlanError::from_router(err);
            log_failure("routing", &err);
            err
        })?;

        let path = Polyline::from_lng_lat_segments(&route.segments);
        let distance_miles = route.distance_meters / METERS_PER_MILE;
        let driving_hours = route.duration_seconds / SECONDS_PER_HOUR;
        debug!(
            points = path.len(),
            distance_miles, driving_hours, "route received"
        );

        let duty = schedule::plan_duty_days(
            driving_hours,
            distance_miles,
            request.current_cycle_used,
            start,
            &self.options,
        )
        .map_err(|err| {
            log_failure("scheduling", &err);
            err
        })?;
        if driving_hours > duty.remaining_cycle_hours {
            debug!(
                remaining_cycle_hours = duty.remaining_cycle_hours,
                driving_hours, "trip exceeds remaining cycle hours"
            );
        }

        let fuel_stop_coordinates = path.evenly_spaced(duty.fuel_stops_count as usize);

        if let Err(err) = self.store.create(request.clone()) {
            error!(error = %err, "failed to persist trip record");
        }

        info!(
            days = duty.log_sheets.len(),
            fuel_stops = fuel_stop_coordinates.len(),
            "route calculated successfully"
        );

        Ok(RouteResult {
            coordinates: path.into_points(),
            fuel_stop_coordinates,
            distance_miles,
            total_hours: driving_hours + self.options.handling_overhead_hours,
            log_sheets: duty.log_sheets,
        })
    }

    /// Geocodes current, pickup and dropoff in that order. The lookups run
    /// in parallel and every one must resolve.
    fn resolve_stops(&self, request: &TripRequest) -> Result<Vec<GeoPoint>, PlanError> {
        let addresses = [
            request.current_location.as_str(),
            request.pickup_location.as_str(),
            request.dropoff_location.as_str(),
        ];

        // One scoped thread per lookup; every outcome is joined before deciding.
        let outcomes: Vec<Result<GeoPoint, PlanError>> = std::thread::scope(|scope| {
            let lookups: Vec<_> = addresses
                .iter()
                .map(|&address| scope.spawn(move || self.lookup(address)))
                .collect();

            lookups
                .into_iter()
                .map(|lookup| {
                    lookup.join().unwrap_or_else(|_| {
                        Err(PlanError::Internal("geocoding worker panicked".to_string()))
                    })
                })
                .collect()
        });

        outcomes.into_iter().collect::<Result<Vec<_>, _>>().map_err(|err| {
            log_failure("geocoding", &err);
            err
        })
    }

    fn lookup(&self, address: &str) -> Result<GeoPoint, PlanError> {
        match self.geocoder.geocode(address) {
            Ok(Some(point)) => Ok(point),
            Ok(None) => Err(PlanError::Geocoding {
                detail: format!("{address}: no candidates"),
            }),
            Err(err) => Err(PlanError::from_geocoder(address, err)),
        }
    }
}

fn log_failure(stage: &str, err: &PlanError) {
    match err {
        PlanError::Geocoding { detail } | PlanError::Routing { detail } => {
            warn!(stage, detail = %detail, "{}", err);
        }
        other => error!(stage, "{}", other),
    }
}
