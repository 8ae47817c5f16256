use axum::{
    Router,
    routing::get,
};

use appointment_cell::appointment_routes;
use auth_cell::auth_routes;
use doctor_cell::doctor_routes;

use crate::state::AppState;

pub fn create_router(state: &AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "MediBook API is running!" }))
        .nest("/auth", auth_routes(state.identity.clone()))
        .nest("/doctors", doctor_routes(state.doctors.clone()))
        .nest(
            "/appointments",
            appointment_routes(state.appointments.clone(), state.identity.clone()),
        )
}
