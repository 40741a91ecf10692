//! In-memory session provider.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AuthError, NewAccount, SessionProvider, SessionToken};
use crate::domain::{Session, User};

/// Keeps accounts and live sessions in process memory.
///
/// Accounts are keyed by lower-cased email. Sessions map a random token to the
/// account email so that account changes show up in existing sessions.
#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    accounts: RwLock<HashMap<String, User>>,
    sessions: RwLock<HashMap<SessionToken, String>>,
}

fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with one pre-registered, verified account.
    pub fn with_account(user: User) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(account_key(&user.email), user);
        Self {
            accounts: RwLock::new(accounts),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    async fn open_session(&self, key: String) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(token.clone(), key);
        token
    }

    /// Number of live sessions.
    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn session(&self, token: &str) -> Result<Option<Session>, AuthError> {
        let Some(key) = self.sessions.read().await.get(token).cloned() else {
            return Ok(None);
        };
        Ok(self
            .accounts
            .read()
            .await
            .get(&key)
            .cloned()
            .map(Session::new))
    }

    async fn sign_in(&self, email: &str) -> Result<SessionToken, AuthError> {
        let key = account_key(email);
        if !self.accounts.read().await.contains_key(&key) {
            return Err(AuthError::UnknownAccount(email.trim().to_string()));
        }
        tracing::info!(name: "auth.sign_in", email = %key, "Session started");
        Ok(self.open_session(key).await)
    }

    async fn register(&self, account: NewAccount) -> Result<SessionToken, AuthError> {
        let key = account_key(&account.email);
        {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&key) {
                return Err(AuthError::AccountExists(account.email.trim().to_string()));
            }
            let name = account.name.filter(|n| !n.trim().is_empty());
            accounts.insert(key.clone(), User::new(name, account.email.trim()));
        }
        tracing::info!(name: "auth.register", email = %key, "Account registered");
        Ok(self.open_session(key).await)
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
