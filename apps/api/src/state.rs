use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use appointment_cell::AppointmentService;
use auth_cell::{FileSessionStore, IdentityService, MemorySessionStore, SessionStore};
use doctor_cell::DoctorService;
use shared_config::AppConfig;
use shared_database::{DirectoryStore, InMemoryDirectory};

/// Services shared by every route, all backed by the same directory.
pub struct AppState {
    pub identity: Arc<IdentityService>,
    pub doctors: Arc<DoctorService>,
    pub appointments: Arc<AppointmentService>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let directory = if config.seed_directory {
            InMemoryDirectory::seeded()
        } else {
            InMemoryDirectory::new()
        };
        let directory: Arc<dyn DirectoryStore> = Arc::new(
            directory.with_latency(Duration::from_millis(config.simulated_latency_ms)),
        );

        let sessions: Arc<dyn SessionStore> = match &config.session_dir {
            Some(dir) => {
                info!("Persisting sessions under {}", dir.display());
                Arc::new(FileSessionStore::new(dir.clone()))
            }
            None => Arc::new(MemorySessionStore::new()),
        };

        Self::new(directory, sessions, config.doctors_page_size)
    }

    pub fn new(
        directory: Arc<dyn DirectoryStore>,
        sessions: Arc<dyn SessionStore>,
        doctors_page_size: usize,
    ) -> Self {
        Self {
            identity: Arc::new(IdentityService::new(directory.clone(), sessions)),
            doctors: Arc::new(DoctorService::with_page_size(directory.clone(), doctors_page_size)),
            appointments: Arc::new(AppointmentService::new(directory)),
        }
    }
}
