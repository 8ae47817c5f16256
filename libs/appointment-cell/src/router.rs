// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch},
    Router,
};

use auth_cell::{session_middleware, IdentityService};

use crate::handlers;
use crate::services::AppointmentService;

pub fn appointment_routes(
    appointments: Arc<AppointmentService>,
    identity: Arc<IdentityService>,
) -> Router {
    let public_routes = Router::new()
        .route("/slots", get(handlers::get_booking_slots));

    let protected_routes = Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/stats", get(handlers::get_stats))
        .route("/{appointment_id}/status", patch(handlers::update_status))
        .layer(middleware::from_fn_with_state(identity, session_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(appointments)
}
