use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_database::DirectoryStore;
use shared_models::account::{Account, RegisterData, Role};
use shared_models::error::AppError;
use shared_utils::generate_id;

use crate::services::session::SessionStore;
use crate::services::validation::validate_registration;

/// Authenticates and registers accounts and tracks the session of each
/// client.
///
/// A client is identified by its session key. Only logged-in keys are held in
/// memory and every change is written through to the [`SessionStore`]. A
/// persisted session is read back only by an explicit [`restore`], at most
/// once per key.
///
/// [`restore`]: IdentityService::restore
pub struct IdentityService {
    directory: Arc<dyn DirectoryStore>,
    sessions: Arc<dyn SessionStore>,
    active: RwLock<HashMap<String, ActiveSession>>,
    restored: RwLock<HashSet<String>>,
}

#[derive(Debug, Clone)]
struct ActiveSession {
    account: Account,
    // False for sessions read back from the store.
    issued: bool,
}

impl IdentityService {
    pub fn new(directory: Arc<dyn DirectoryStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            directory,
            sessions,
            active: RwLock::new(HashMap::new()),
            restored: RwLock::new(HashSet::new()),
        }
    }

    /// Logs a client in as the account with this exact email and role.
    ///
    /// The password is accepted as given; there are no stored credentials to
    /// check it against.
    pub async fn authenticate(
        &self,
        session_key: &str,
        email: &str,
        _password: &str,
        role: Role,
    ) -> Result<Account, AppError> {
        debug!("Authenticating {} as {}", email, role);

        let account = self
            .directory
            .find_account_by_email(email)
            .await
            .filter(|account| account.role == role);

        let Some(account) = account else {
            warn!("Login rejected for {} as {}", email, role);
            return Err(AppError::InvalidCredentials);
        };

        self.establish(session_key, &account).await;
        info!("Account {} logged in", account.id);
        Ok(account)
    }

    /// Creates a new account and logs the client in as it.
    pub async fn register(&self, session_key: &str, data: RegisterData) -> Result<Account, AppError> {
        debug!("Registering new {} account for {}", data.role, data.email);

        validate_registration(&data)?;

        if self.directory.find_account_by_email(&data.email).await.is_some() {
            warn!("Registration rejected, email {} already in use", data.email);
            return Err(AppError::DuplicateEmail(data.email));
        }

        let specialization = match data.role {
            Role::Doctor => data.specialization.map(|s| s.trim().to_string()),
            Role::Patient => None,
        };

        let account = Account {
            id: generate_id(),
            name: data.name.trim().to_string(),
            email: data.email,
            role: data.role,
            photo_url: data.photo_url.filter(|url| !url.trim().is_empty()),
            specialization,
            created_at: Utc::now(),
        };

        // The directory re-checks the email under its write lock.
        let account = self.directory.insert_account(account).await?;

        self.establish(session_key, &account).await;
        info!("Registered account {} ({})", account.id, account.role);
        Ok(account)
    }

    /// Clears the client's session. Never fails.
    pub async fn end_session(&self, session_key: &str) {
        let remaining = {
            let mut active = self.active.write().await;
            active.remove(session_key);
            active.len()
        };

        if let Err(err) = self.sessions.clear(session_key).await {
            warn!("Failed to clear persisted session: {}", err);
        }

        info!("Session ended, {} still active", remaining);
    }

    /// Account the client is currently logged in as, if any. Never touches
    /// the session store.
    pub async fn current_session(&self, session_key: &str) -> Option<Account> {
        self.active
            .read()
            .await
            .get(session_key)
            .map(|session| session.account.clone())
    }

    /// Like [`current_session`](Self::current_session), but only for keys
    /// handed out by [`authenticate`](Self::authenticate) or
    /// [`register`](Self::register) in this process.
    pub async fn issued_session(&self, session_key: &str) -> Option<Account> {
        self.active
            .read()
            .await
            .get(session_key)
            .filter(|session| session.issued)
            .map(|session| session.account.clone())
    }

    pub async fn active_sessions(&self) -> usize {
        self.active.read().await.len()
    }

    /// Reads the persisted session for this key into memory, unless it was
    /// already read or the key is already logged in.
    pub async fn restore(&self, session_key: &str) -> Option<Account> {
        if let Some(account) = self.current_session(session_key).await {
            return Some(account);
        }
        if !self.restored.write().await.insert(session_key.to_string()) {
            return None;
        }

        let loaded = match self.sessions.load(session_key).await {
            Ok(account) => account?,
            Err(err) => {
                warn!("Failed to load persisted session: {}", err);
                return None;
            }
        };

        debug!("Restored session for account {}", loaded.id);
        let mut active = self.active.write().await;
        let session = active
            .entry(session_key.to_string())
            .or_insert(ActiveSession {
                account: loaded,
                issued: false,
            });
        Some(session.account.clone())
    }

    async fn establish(&self, session_key: &str, account: &Account) {
        self.active.write().await.insert(
            session_key.to_string(),
            ActiveSession {
                account: account.clone(),
                issued: true,
            },
        );

        // Persistence is best effort; the in-memory session stands regardless.
        if let Err(err) = self.sessions.save(session_key, account).await {
            warn!("Failed to persist session: {}", err);
        }
    }
}
