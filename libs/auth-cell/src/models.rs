use serde::{Deserialize, Serialize};

use shared_models::account::{Account, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Returned by login and registration. Clients send `session_key` back as a
/// bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_key: String,
    pub account: Account,
}

/// Resolved session of the calling client, placed in request extensions by
/// [`crate::middleware::session_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub key: String,
    pub account: Account,
}
