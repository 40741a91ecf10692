//! Landing page navigation variant.

use crate::domain::Session;
use crate::state::dashboard::first_name;

/// Which set of controls the landing page shows.
///
/// The header and the hero call-to-action both render from the same value so
/// they cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavVariant {
    /// Signed in. `first_name` is empty when the user has no display name.
    Authenticated { first_name: String },
    Anonymous,
}

impl NavVariant {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Select the landing navigation for a session.
pub fn nav_variant(session: Option<&Session>) -> NavVariant {
    match session {
        Some(session) => NavVariant::Authenticated {
            first_name: first_name(session.user.display_name())
                .unwrap_or_default()
                .to_string(),
        },
        None => NavVariant::Anonymous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    #[test]
    fn anonymous_without_session() {
        assert_eq!(nav_variant(None), NavVariant::Anonymous);
        assert!(!nav_variant(None).is_authenticated());
    }

    #[test]
    fn authenticated_uses_first_token() {
        let session = Session::new(User::new(Some("Jane Smith".to_string()), "j@e.com"));
        assert_eq!(
            nav_variant(Some(&session)),
            NavVariant::Authenticated {
                first_name: "Jane".to_string()
            }
        );
    }

    #[test]
    fn authenticated_without_name() {
        let session = Session::new(User::new(None, "j@e.com"));
        let variant = nav_variant(Some(&session));
        assert!(variant.is_authenticated());
        assert_eq!(
            variant,
            NavVariant::Authenticated {
                first_name: String::new()
            }
        );
    }
}
