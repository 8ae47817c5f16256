// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use auth_cell::CurrentSession;
use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentFilter, AppointmentStats, AppointmentStatus, BookAppointmentRequest,
    UpdateStatusRequest,
};
use crate::services::AppointmentService;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

/// Dashboard filters as sent by the client. `status=all` or an empty value
/// means no status filter.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentQueryParams {
    pub status: Option<String>,
    pub date: Option<String>,
}

impl AppointmentQueryParams {
    pub fn into_filter(self) -> Result<AppointmentFilter, AppError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(value) => Some(value.parse::<AppointmentStatus>()?),
        };

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
            })?),
        };

        Ok(AppointmentFilter { status, date })
    }
}

// ==============================================================================
// HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(appointments): State<Arc<AppointmentService>>,
    Extension(session): Extension<CurrentSession>,
    Query(params): Query<AppointmentQueryParams>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let filter = params.into_filter()?;
    let results = appointments
        .list_for_account(&session.account, &filter)
        .await;
    Ok(Json(results))
}

#[axum::debug_handler]
pub async fn get_stats(
    State(appointments): State<Arc<AppointmentService>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<AppointmentStats>, AppError> {
    Ok(Json(appointments.stats_for_account(&session.account).await))
}

#[axum::debug_handler]
pub async fn get_booking_slots(
    State(appointments): State<Arc<AppointmentService>>,
) -> Result<Json<Value>, AppError> {
    let slots: Vec<String> = appointments
        .booking_slots()
        .into_iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect();

    Ok(Json(json!({ "slots": slots })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(appointments): State<Arc<AppointmentService>>,
    Extension(session): Extension<CurrentSession>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    if !session.account.is_patient() {
        warn!("Account {} attempted to book without patient role", session.account.id);
        return Err(AppError::Forbidden("Only patients can book appointments".to_string()));
    }

    let appointment = appointments
        .book(&request.doctor_id, &session.account.id, request.appointment_date)
        .await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn update_status(
    State(appointments): State<Arc<AppointmentService>>,
    Extension(session): Extension<CurrentSession>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = appointments.get_appointment(&appointment_id).await?;

    let caller = &session.account.id;
    if &appointment.patient_id != caller && &appointment.doctor_id != caller {
        warn!("Account {} is not a participant of appointment {}", caller, appointment_id);
        return Err(AppError::Forbidden(
            "Not a participant of this appointment".to_string(),
        ));
    }

    let updated = appointments
        .transition(&appointment_id, request.status)
        .await?;

    Ok(Json(updated))
}
