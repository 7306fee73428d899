//! # Appointment Handlers
//!
//! Create, list, and delete appointments for the shared room. Creation runs
//! the conflict scan under the per-date lock so two concurrent requests for
//! overlapping intervals on the same date cannot both succeed.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use roombook_core::{
    booking,
    errors::BookingError,
    models::appointment::{Appointment, CreateAppointmentRequest, DeleteAppointmentResponse},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Parses a `YYYY-MM-DD` path segment, rejecting malformed input as a
/// client error rather than letting it surface as a store failure.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError(BookingError::Validation(format!(
            "Invalid date '{raw}', expected YYYY-MM-DD"
        )))
    })
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    booking::validate_request(&payload)?;

    // Hold the date lock across the fetch-scan-insert sequence so no other
    // create for this date can interleave
    let _guard = state.date_locks.acquire(payload.date).await;

    let existing = state
        .store
        .find_by_date(payload.date)
        .await
        .map_err(BookingError::Database)?;

    if let Some(hit) = booking::find_conflict(payload.start_time, payload.end_time, &existing) {
        return Err(AppError(BookingError::Conflict(format!(
            "Time conflict with existing appointment: {} by {}",
            hit.title, hit.name
        ))));
    }

    let appointment = Appointment {
        id: Uuid::new_v4(),
        name: payload.name,
        date: payload.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        title: payload.title,
        participants: payload.participants,
        created_at: Utc::now(),
    };

    state
        .store
        .insert(&appointment)
        .await
        .map_err(BookingError::Database)?;

    tracing::debug!(
        "Appointment created: id={}, date={}, start={}",
        appointment.id,
        appointment.date,
        appointment.start_time
    );

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn list_appointments_by_date(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let date = parse_date(&date)?;

    let appointments = state
        .store
        .find_by_date(date)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(appointments))
}

/// Diagnostic listing of every stored appointment across all dates, ordered
/// by `(date, start_time)`. Not part of the booking workflow.
#[axum::debug_handler]
pub async fn list_all_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state
        .store
        .find_all()
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAppointmentResponse>, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| {
        AppError(BookingError::Validation(format!(
            "Invalid appointment id '{id}'"
        )))
    })?;

    let removed = state
        .store
        .delete_by_id(id)
        .await
        .map_err(BookingError::Database)?;

    if removed == 0 {
        return Err(AppError(BookingError::NotFound(format!(
            "Appointment with ID {id} not found"
        ))));
    }

    Ok(Json(DeleteAppointmentResponse {
        message: "Appointment deleted successfully".to_string(),
    }))
}
