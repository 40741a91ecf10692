//! Session provider seam.
//!
//! Views never own authentication state. They ask a [`SessionProvider`] for a
//! [`SessionSnapshot`] keyed by the session cookie and may only change it by
//! calling [`SessionProvider::sign_out`].
//!
//! - [`memory::InMemorySessionProvider`]: process-local provider with an account book
//! - [`snapshot`]: the `{ data, isPending }` view of a lookup

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Session;

pub mod memory;
pub mod snapshot;

pub use memory::InMemorySessionProvider;
pub use snapshot::{SessionSnapshot, resolve_snapshot};

/// Session provider failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account is registered for this email.
    #[error("no account found for {0}")]
    UnknownAccount(String),
    /// An account already exists for this email.
    #[error("an account already exists for {0}")]
    AccountExists(String),
    /// The backing provider failed.
    #[error("session provider unavailable: {0}")]
    Unavailable(String),
}

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: Option<String>,
    pub email: String,
}

/// Opaque session token carried in the session cookie.
pub type SessionToken = String;

#[async_trait]
pub trait SessionProvider: Send + Sync + std::fmt::Debug {
    /// Look up the session for a token. `Ok(None)` means signed out.
    async fn session(&self, token: &str) -> Result<Option<Session>, AuthError>;

    /// Start a session for an existing account.
    async fn sign_in(&self, email: &str) -> Result<SessionToken, AuthError>;

    /// Create an account and start a session for it.
    async fn register(&self, account: NewAccount) -> Result<SessionToken, AuthError>;

    /// End the session for a token.
    async fn sign_out(&self, token: &str) -> Result<(), AuthError>;
}
