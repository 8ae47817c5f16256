use std::sync::Arc;

use axum::extract::{Extension, Json, State};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::account::RegisterData;
use shared_models::error::AppError;
use shared_utils::generate_session_key;

use crate::models::{CurrentSession, LoginRequest, SessionResponse};
use crate::services::IdentityService;

#[axum::debug_handler]
pub async fn login(
    State(identity): State<Arc<IdentityService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Login request for {}", request.email);

    let session_key = generate_session_key();
    let account = identity
        .authenticate(&session_key, &request.email, &request.password, request.role)
        .await?;

    Ok(Json(SessionResponse {
        session_key,
        account,
    }))
}

#[axum::debug_handler]
pub async fn register(
    State(identity): State<Arc<IdentityService>>,
    Json(request): Json<RegisterData>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Registration request for {}", request.email);

    let session_key = generate_session_key();
    let account = identity.register(&session_key, request).await?;

    Ok(Json(SessionResponse {
        session_key,
        account,
    }))
}

#[axum::debug_handler]
pub async fn logout(
    State(identity): State<Arc<IdentityService>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<Value>, AppError> {
    identity.end_session(&session.key).await;

    Ok(Json(json!({
        "logged_out": true,
        "account_id": session.account.id
    })))
}

#[axum::debug_handler]
pub async fn get_session(
    Extension(session): Extension<CurrentSession>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(session.account)))
}
