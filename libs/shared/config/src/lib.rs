use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub doctors_page_size: usize,
    /// Directory for persisted sessions. Sessions stay in memory when unset.
    pub session_dir: Option<PathBuf>,
    pub simulated_latency_ms: u64,
    pub seed_directory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            doctors_page_size: DEFAULT_PAGE_SIZE,
            session_dir: None,
            simulated_latency_ms: 0,
            seed_directory: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| {
                warn!("HOST not set, using default");
                defaults.host.clone()
            }),
            port: parse_var("PORT", defaults.port),
            doctors_page_size: parse_var("DOCTORS_PAGE_SIZE", defaults.doctors_page_size),
            session_dir: env::var("SESSION_DIR").ok().map(PathBuf::from),
            simulated_latency_ms: parse_var("SIMULATED_LATENCY_MS", defaults.simulated_latency_ms),
            seed_directory: parse_var("SEED_DIRECTORY", defaults.seed_directory),
        };

        if config.doctors_page_size == 0 {
            warn!("DOCTORS_PAGE_SIZE must be positive, using default");
            return Self {
                doctors_page_size: DEFAULT_PAGE_SIZE,
                ..config
            };
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
