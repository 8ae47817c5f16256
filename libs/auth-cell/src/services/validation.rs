use std::sync::OnceLock;

use regex::Regex;

use shared_models::account::{RegisterData, Role};
use shared_models::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

pub fn validate_email(email: &str) -> bool {
    email.len() <= 254 && email_regex().is_match(email)
}

/// Checks registration input the way the sign-up form does.
pub fn validate_registration(data: &RegisterData) -> Result<(), AppError> {
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    if !validate_email(&data.email) {
        return Err(AppError::Validation("Invalid email".to_string()));
    }

    if data.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if data.role == Role::Doctor
        && data
            .specialization
            .as_deref()
            .map_or(true, |s| s.trim().is_empty())
    {
        return Err(AppError::Validation("Specialization is required".to_string()));
    }

    Ok(())
}
