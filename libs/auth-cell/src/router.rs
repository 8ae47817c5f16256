use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use crate::handlers;
use crate::middleware::session_middleware;
use crate::services::IdentityService;

pub fn auth_routes(identity: Arc<IdentityService>) -> Router {
    let public_routes = Router::new()
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register));

    let protected_routes = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/session", get(handlers::get_session))
        .layer(middleware::from_fn_with_state(identity.clone(), session_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(identity)
}
