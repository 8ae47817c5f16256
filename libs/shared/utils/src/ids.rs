use uuid::Uuid;

pub const ID_LENGTH: usize = 9;

/// Short opaque identifier for new accounts and appointments.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LENGTH].to_string()
}

/// Bearer key identifying one client's session.
pub fn generate_session_key() -> String {
    Uuid::new_v4().to_string()
}
