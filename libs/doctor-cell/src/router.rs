use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::DoctorService;

pub fn doctor_routes(doctors: Arc<DoctorService>) -> Router {
    // The directory is public; nothing here needs a session.
    Router::new()
        .route("/", get(handlers::search_doctors))
        .route("/specializations", get(handlers::get_specializations))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(doctors)
}
