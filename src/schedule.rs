//! Simplified Hours-of-Service duty schedule.
//!
//! This is a heuristic for sketching log sheets, not a certified regulatory
//! calculation.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

pub const METERS_PER_MILE: f64 = 1609.34;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// Maximum driving hours in a single duty day.
    pub max_driving_hours_per_day: f64,
    /// Fixed on-duty overhead for pickup and dropoff handling.
    pub handling_overhead_hours: f64,
    /// Mandatory rest between the end of one day's driving and the next start.
    pub rest_hours: f64,
    /// One fuel stop is planned per this many miles.
    pub miles_per_fuel_stop: f64,
    /// Length of the rolling duty cycle.
    pub cycle_limit_hours: f64,
    /// Longest schedule that will be laid out. Routes needing more duty days
    /// are rejected.
    pub max_schedule_days: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            max_driving_hours_per_day: 11.0,
            handling_overhead_hours: 2.0,
            rest_hours: 13.0,
            miles_per_fuel_stop: 1000.0,
            cycle_limit_hours: 70.0,
            max_schedule_days: 366,
        }
    }
}

/// One duty day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSheet {
    /// 1-based day index.
    pub day: u32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub fuel_stops: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DutySchedule {
    pub log_sheets: Vec<LogSheet>,
    /// Fuel stops planned for the whole trip, before per-day allocation.
    pub fuel_stops_count: u32,
    /// Cycle hours left before the trip starts. Reported only; it does not
    /// shorten or split the schedule.
    pub remaining_cycle_hours: f64,
}

/// `max(1, floor((driving + overhead) / max_per_day))`
pub fn days_needed(driving_hours: f64, options: &ScheduleOptions) -> u32 {
    let days = ((driving_hours + options.handling_overhead_hours)
        / options.max_driving_hours_per_day)
        .floor();
    days.max(1.0) as u32
}

/// One stop per full `miles_per_fuel_stop` driven.
pub fn fuel_stops_needed(distance_miles: f64, options: &ScheduleOptions) -> u32 {
    (distance_miles / options.miles_per_fuel_stop).floor().max(0.0) as u32
}

/// Lays the trip out over duty days starting at `start`.
///
/// The first and last days carry the handling overhead. Days are spaced by
/// the driving time plus `rest_hours`. When the trip needs more driving than
/// `days_needed` days can hold, the leftover is not scheduled.
///
/// Fails with [`PlanError::Internal`] when the trip needs more than
/// `max_schedule_days` or the duty clock leaves the representable range.
pub fn plan_duty_days(
    driving_hours: f64,
    distance_miles: f64,
    current_cycle_used: f64,
    start: NaiveDateTime,
    options: &ScheduleOptions,
) -> Result<DutySchedule, PlanError> {
    let days = days_needed(driving_hours, options);
    if days > options.max_schedule_days {
        return Err(PlanError::Internal(format!(
            "{driving_hours:.1} driving hours need {days} duty days, limit is {}",
            options.max_schedule_days
        )));
    }

    let fuel_stops_count = fuel_stops_needed(distance_miles, options);
    let hours_per_day = driving_hours.min(options.max_driving_hours_per_day);

    let mut log_sheets = Vec::with_capacity(days as usize);
    let mut remaining_stops = fuel_stops_count;
    let mut day_start = start;

    for day in 0..days {
        let elapsed = f64::from(day) * hours_per_day;
        let daily_hours = hours_per_day.min(driving_hours - elapsed).max(0.0);
        let day_end = advance(day_start, daily_hours)?;

        let on_duty_hours = if day == 0 || day == days - 1 {
            daily_hours + options.handling_overhead_hours
        } else {
            daily_hours
        };

        let miles_left = distance_miles - f64::from(day) * options.miles_per_fuel_stop;
        let fuel_stops = remaining_stops.min(u32::from(miles_left > 0.0));

        log_sheets.push(LogSheet {
            day: day + 1,
            date: day_start.format("%Y-%m-%d").to_string(),
            start_time: day_start.format("%H:%M").to_string(),
            end_time: day_end.format("%H:%M").to_string(),
            driving_hours: daily_hours,
            on_duty_hours,
            off_duty_hours: 24.0 - on_duty_hours,
            fuel_stops,
        });

        day_start = advance(day_end, options.rest_hours)?;
        remaining_stops = remaining_stops.saturating_sub(1);
    }

    Ok(DutySchedule {
        log_sheets,
        fuel_stops_count,
        remaining_cycle_hours: options.cycle_limit_hours - current_cycle_used,
    })
}

fn advance(from: NaiveDateTime, hours: f64) -> Result<NaiveDateTime, PlanError> {
    Duration::try_milliseconds((hours * SECONDS_PER_HOUR * 1000.0).round() as i64)
        .and_then(|delta| from.checked_add_signed(delta))
        .ok_or_else(|| PlanError::Internal(format!("duty clock overflow adding {hours}h to {from}")))
}
