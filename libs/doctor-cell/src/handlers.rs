use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{DoctorPage, DoctorSearchFilters, ALL_SPECIALIZATIONS};
use crate::services::DoctorService;

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub term: Option<String>,
    pub specialization: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(doctors): State<Arc<DoctorService>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<DoctorPage>, AppError> {
    let filters = DoctorSearchFilters::new(
        query.term.unwrap_or_default(),
        query
            .specialization
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ALL_SPECIALIZATIONS.to_string()),
    );

    let page = doctors
        .search(&filters, query.page.unwrap_or(1), query.page_size)
        .await?;

    Ok(Json(page))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(doctors): State<Arc<DoctorService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = doctors.get_doctor(&doctor_id).await?;
    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_specializations(
    State(doctors): State<Arc<DoctorService>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "specializations": doctors.specializations()
    })))
}
