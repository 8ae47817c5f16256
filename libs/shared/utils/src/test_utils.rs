use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::account::{Account, RegisterData, Role};

use crate::ids::generate_id;

// Seeded directory fixtures.
pub const SEED_CARDIOLOGIST_ID: &str = "1";
pub const SEED_NEUROLOGIST_ID: &str = "2";
pub const SEED_PATIENT_JOHN_ID: &str = "7";
pub const SEED_PATIENT_JANE_ID: &str = "8";
pub const SEED_CARDIOLOGIST_EMAIL: &str = "sarah.johnson@hospital.com";
pub const SEED_PATIENT_JOHN_EMAIL: &str = "john.smith@email.com";
pub const TEST_PASSWORD: &str = "secret123";

pub struct TestConfig {
    pub doctors_page_size: usize,
    pub session_dir: Option<PathBuf>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            doctors_page_size: 6,
            session_dir: None,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            doctors_page_size: self.doctors_page_size,
            session_dir: self.session_dir.clone(),
            simulated_latency_ms: 0,
            seed_directory: true,
        }
    }
}

pub struct TestUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub specialization: Option<String>,
}

impl TestUser {
    /// A user with a unique email so repeated registrations never collide.
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            email: format!("{}@example.com", Uuid::new_v4().simple()),
            role,
            specialization: None,
        }
    }

    pub fn patient(name: &str) -> Self {
        Self::new(name, Role::Patient)
    }

    pub fn doctor(name: &str, specialization: &str) -> Self {
        Self {
            specialization: Some(specialization.to_string()),
            ..Self::new(name, Role::Doctor)
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn to_register_data(&self) -> RegisterData {
        RegisterData {
            name: self.name.clone(),
            email: self.email.clone(),
            password: TEST_PASSWORD.to_string(),
            role: self.role,
            specialization: self.specialization.clone(),
            photo_url: None,
        }
    }

    pub fn to_account(&self) -> Account {
        Account {
            id: generate_id(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            photo_url: None,
            specialization: self.specialization.clone(),
            created_at: Utc::now(),
        }
    }
}
