//! Point-in-time answer from the session provider.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::SessionProvider;
use crate::domain::Session;

/// What the views know about the session: `{ data, isPending }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub data: Option<Session>,
    pub is_pending: bool,
}

impl SessionSnapshot {
    /// Lookup still in flight.
    pub fn pending() -> Self {
        Self {
            data: None,
            is_pending: true,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            data: Some(session),
            is_pending: false,
        }
    }

    /// The session, if the lookup finished with one.
    pub fn session(&self) -> Option<&Session> {
        if self.is_pending {
            None
        } else {
            self.data.as_ref()
        }
    }
}

/// Ask `provider` about `token`, giving up after `timeout`.
///
/// A missing token never reaches the provider. A lookup that outlives the
/// timeout is reported as pending. Provider errors are logged and read as
/// signed out.
pub async fn resolve_snapshot(
    provider: &dyn SessionProvider,
    token: Option<&str>,
    timeout: Duration,
) -> SessionSnapshot {
    let Some(token) = token else {
        return SessionSnapshot::signed_out();
    };

    match tokio::time::timeout(timeout, provider.session(token)).await {
        Ok(Ok(Some(session))) => SessionSnapshot::signed_in(session),
        Ok(Ok(None)) => SessionSnapshot::signed_out(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Session lookup failed");
            SessionSnapshot::signed_out()
        }
        Err(_) => {
            tracing::debug!(
                timeout_ms = timeout.as_millis(),
                "Session lookup still pending"
            );
            SessionSnapshot::pending()
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::auth::{AuthError, InMemorySessionProvider, NewAccount, SessionToken};
    use crate::domain::User;

    #[derive(Debug)]
    struct SlowProvider;

    #[async_trait]
    impl SessionProvider for SlowProvider {
        async fn session(&self, _token: &str) -> Result<Option<Session>, AuthError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }

        async fn sign_in(&self, _email: &str) -> Result<SessionToken, AuthError> {
            Err(AuthError::Unavailable("slow".to_string()))
        }

        async fn register(&self, _account: NewAccount) -> Result<SessionToken, AuthError> {
            Err(AuthError::Unavailable("slow".to_string()))
        }

        async fn sign_out(&self, _token: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn missing_token_is_signed_out() {
        let snapshot =
            resolve_snapshot(&SlowProvider, None, Duration::from_millis(10)).await;
        assert_eq!(snapshot, SessionSnapshot::signed_out());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookup_is_pending() {
        let snapshot =
            resolve_snapshot(&SlowProvider, Some("t"), Duration::from_millis(50)).await;
        assert!(snapshot.is_pending);
        assert!(snapshot.session().is_none());
    }

    #[tokio::test]
    async fn known_token_is_signed_in() {
        let provider = InMemorySessionProvider::with_account(User::new(
            Some("Jane Smith".to_string()),
            "jane@example.com",
        ));
        let token = provider.sign_in("jane@example.com").await.unwrap();

        let snapshot =
            resolve_snapshot(&provider, Some(&token), Duration::from_secs(1)).await;
        assert!(!snapshot.is_pending);
        assert_eq!(
            snapshot.session().and_then(|s| s.user.name.as_deref()),
            Some("Jane Smith")
        );
    }

    #[test]
    fn serializes_is_pending_in_camel_case() {
        let json = serde_json::to_value(SessionSnapshot::pending()).unwrap();
        assert_eq!(json["isPending"], true);
        assert!(json["data"].is_null());
    }
}
