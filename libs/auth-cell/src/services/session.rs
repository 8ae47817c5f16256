use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::account::Account;
use shared_models::error::AppError;

/// Storage key of the single-client session.
pub const SESSION_KEY: &str = "user";

/// Persistence capability for sessions: one serialized account per key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Account>, AppError>;

    async fn save(&self, key: &str, account: &Account) -> Result<(), AppError>;

    /// Removing a key that holds nothing succeeds.
    async fn clear(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Account>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, key: &str) -> Result<Option<Account>, AppError> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, account: &Account) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .insert(key.to_string(), account.clone());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), AppError> {
        self.sessions.write().await.remove(key);
        Ok(())
    }
}

/// Keeps each session as `<dir>/<key>.json`, so sessions survive restarts.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::Validation(format!("Invalid session key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn storage_error(err: impl std::fmt::Display) -> AppError {
    AppError::Storage(err.to_string())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, key: &str) -> Result<Option<Account>, AppError> {
        let path = self.path_for(key)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let account = serde_json::from_slice(&bytes).map_err(storage_error)?;
                debug!("Loaded session from {}", path.display());
                Ok(Some(account))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    async fn save(&self, key: &str, account: &Account) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec(account).map_err(storage_error)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(storage_error)?;
        tokio::fs::write(&path, bytes).await.map_err(storage_error)?;

        debug!("Saved session to {}", path.display());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error(err)),
        }
    }
}
