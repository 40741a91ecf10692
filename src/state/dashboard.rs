//! Authentication-gated dashboard state.

use crate::auth::SessionSnapshot;
use crate::domain::Session;

/// Placeholder used when the user has no display name.
const NAME_PLACEHOLDER: &str = "U";

/// What the dashboard may render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    /// Session lookup in flight. Render a placeholder, touch no data.
    Loading,
    /// No session. Render the access-denied panel only.
    Unauthorized,
    /// Signed in.
    Authorized(Session),
}

impl From<SessionSnapshot> for DashboardState {
    fn from(snapshot: SessionSnapshot) -> Self {
        if snapshot.is_pending {
            return Self::Loading;
        }
        match snapshot.data {
            Some(session) => Self::Authorized(session),
            None => Self::Unauthorized,
        }
    }
}

impl DashboardState {
    /// Short name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unauthorized => "unauthorized",
            Self::Authorized(_) => "authorized",
        }
    }
}

/// Avatar initials: first character of each whitespace-separated token,
/// upper-cased, at most two characters.
pub fn user_initials(name: Option<&str>) -> String {
    let name = name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(NAME_PLACEHOLDER);

    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// First whitespace token of a display name.
pub fn first_name(name: Option<&str>) -> Option<&str> {
    name.and_then(|n| n.split_whitespace().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    fn session() -> Session {
        Session::new(User::new(Some("John Doe".to_string()), "john@example.com"))
    }

    #[test]
    fn pending_wins_over_data() {
        let snapshot = SessionSnapshot {
            data: Some(session()),
            is_pending: true,
        };
        assert_eq!(DashboardState::from(snapshot), DashboardState::Loading);
        assert_eq!(
            DashboardState::from(SessionSnapshot::pending()),
            DashboardState::Loading
        );
    }

    #[test]
    fn no_session_is_unauthorized() {
        assert_eq!(
            DashboardState::from(SessionSnapshot::signed_out()),
            DashboardState::Unauthorized
        );
    }

    #[test]
    fn session_is_authorized() {
        let session = session();
        let state = DashboardState::from(SessionSnapshot::signed_in(session.clone()));
        assert_eq!(state, DashboardState::Authorized(session));
        assert_eq!(state.as_str(), "authorized");
    }

    #[test]
    fn initials() {
        assert_eq!(user_initials(Some("John Doe")), "JD");
        assert_eq!(user_initials(Some("madonna")), "M");
        assert_eq!(user_initials(Some("")), "U");
        assert_eq!(user_initials(None), "U");
        assert_eq!(user_initials(Some("mary ann van dyke")), "MA");
        assert_eq!(user_initials(Some("  jean   luc ")), "JL");
    }

    #[test]
    fn first_names() {
        assert_eq!(first_name(Some("John Doe")), Some("John"));
        assert_eq!(first_name(Some("")), None);
        assert_eq!(first_name(None), None);
    }
}
