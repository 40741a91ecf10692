//! Practice Portal
//!
//! Public landing page and session-gated dashboard for a small medical
//! practice, rendered on the server.
//!
//! # Architecture
//!
//! - **Server**: Axum router with cookie sessions and a request timeout layer
//! - **Auth**: [`auth::SessionProvider`] seam resolving `{ data, isPending }` snapshots
//! - **State**: pure view-state derivation (dashboard gate, tabs, nav variant)
//! - **UI**: Leptos SSR pages and components
//!
//! # Modules
//!
//! - [`auth`]: session provider trait and the in-memory provider
//! - [`domain`]: user, client and appointment records
//! - [`repository`]: collection storage behind the dashboard tables
//! - [`state`]: view-state machine
//! - [`ui`]: page rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]
#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use auth::{InMemorySessionProvider, SessionProvider, SessionSnapshot, resolve_snapshot};
use config::AppConfig;
use domain::{Appointment, Client, User, mock_appointments, mock_clients};
use repository::{InMemoryRepository, Repository};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Session provider consulted on every page load.
    pub sessions: Arc<dyn SessionProvider>,
    /// Client records for the clients tab.
    pub clients: Arc<dyn Repository<Client>>,
    /// Appointment records for the appointments tab.
    pub appointments: Arc<dyn Repository<Appointment>>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// In-memory state seeded with the mock collections and, when enabled,
    /// the verified demo account.
    pub async fn in_memory(config: Arc<AppConfig>) -> Self {
        let sessions = if config.demo.enabled {
            let mut user = User::new(Some(config.demo.name.clone()), config.demo.email.clone());
            user.email_verified = true;
            tracing::info!(email = %config.demo.email, "Seeded demo account");
            InMemorySessionProvider::with_account(user)
        } else {
            InMemorySessionProvider::new()
        };

        Self::new(Arc::new(sessions), config)
    }

    /// State over a custom session provider with the mock collections.
    pub fn new(sessions: Arc<dyn SessionProvider>, config: Arc<AppConfig>) -> Self {
        Self {
            sessions,
            clients: Arc::new(InMemoryRepository::with_records(mock_clients())),
            appointments: Arc::new(InMemoryRepository::with_records(mock_appointments())),
            config,
        }
    }

    /// Resolve the session snapshot for a cookie token within the configured
    /// lookup timeout.
    pub async fn snapshot(&self, token: Option<&str>) -> SessionSnapshot {
        resolve_snapshot(
            self.sessions.as_ref(),
            token,
            self.config.session.lookup_timeout(),
        )
        .await
    }
}
