use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_models::error::AppError;

use crate::models::CurrentSession;
use crate::services::IdentityService;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    match auth_value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        )),
    }
}

/// Resolves the bearer session key to the logged-in account.
pub async fn session_middleware(
    State(identity): State<Arc<IdentityService>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = extract_bearer_token(request.headers())?;

    let account = identity
        .issued_session(&key)
        .await
        .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;

    request
        .extensions_mut()
        .insert(CurrentSession { key, account });

    Ok(next.run(request).await)
}
