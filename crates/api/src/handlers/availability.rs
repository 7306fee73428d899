//! # Availability Handlers
//!
//! This module derives the daily availability grid and serves the two
//! lighter-weight variants of the same question: the compact occupied-slot
//! listing and the boolean check for a single candidate interval.
//!
//! ## Availability Derivation
//!
//! The bookable day (08:00-20:00) is partitioned into fixed 30-minute
//! half-open slots. Each slot is tested against the date's appointments with
//! the shared overlap predicate; the first overlapping appointment marks the
//! slot unavailable and is attached as the blocker. The result depends only
//! on the stored appointment set for the date, so responses are
//! deterministic.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveTime, Utc};
use std::sync::Arc;

use roombook_core::{
    booking,
    errors::BookingError,
    models::availability::{
        AvailabilityResponse, CheckAvailabilityResponse, OccupiedSlot,
    },
};

use crate::{
    handlers::appointment::parse_date,
    middleware::error_handling::AppError,
    ApiState,
};

fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    roombook_core::models::hhmm::parse(raw).map_err(|_| {
        AppError(BookingError::Validation(format!(
            "Invalid time '{raw}', expected HH:MM"
        )))
    })
}

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let date = parse_date(&date)?;

    let appointments = state
        .store
        .find_by_date(date)
        .await
        .map_err(BookingError::Database)?;

    let slots = booking::build_availability(&appointments);

    Ok(Json(AvailabilityResponse { date, slots }))
}

/// Compact listing of the day's bookings, ordered by start time. A smaller
/// payload than the full availability grid for clients that only render
/// occupied ranges.
#[axum::debug_handler]
pub async fn get_occupied_slots(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<OccupiedSlot>>, AppError> {
    let date = parse_date(&date)?;

    let appointments = state
        .store
        .find_by_date(date)
        .await
        .map_err(BookingError::Database)?;

    let occupied = appointments
        .into_iter()
        .map(|a| OccupiedSlot {
            id: a.id,
            name: a.name,
            title: a.title,
            start_time: a.start_time,
            end_time: a.end_time,
        })
        .collect();

    Ok(Json(occupied))
}

/// Answers whether a candidate interval would conflict with an existing
/// appointment, without creating anything.
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Path((date, start_time, end_time)): Path<(String, String, String)>,
) -> Result<Json<CheckAvailabilityResponse>, AppError> {
    let date = parse_date(&date)?;
    let start_time = parse_time(&start_time)?;
    let end_time = parse_time(&end_time)?;

    if start_time >= end_time {
        return Err(AppError(BookingError::Validation(
            "start_time must be before end_time".to_string(),
        )));
    }

    let appointments = state
        .store
        .find_by_date(date)
        .await
        .map_err(BookingError::Database)?;

    let available = booking::find_conflict(start_time, end_time, &appointments).is_none();

    Ok(Json(CheckAvailabilityResponse {
        available,
        checked_at: Utc::now(),
    }))
}
