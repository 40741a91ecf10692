//! Dashboard tab selection.

use std::fmt;
use std::str::FromStr;

/// Dashboard tabs. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Profile,
    Clients,
    Appointments,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Clients, Tab::Appointments];

    /// URL slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Clients => "clients",
            Self::Appointments => "appointments",
        }
    }

    /// Trigger label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Clients => "Clients",
            Self::Appointments => "Appointments",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unrecognised tab slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Local tab state of the dashboard workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workspace {
    active: Tab,
}

impl Workspace {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    /// Workspace opened from a `?tab=` query value. Unknown or missing slugs
    /// open the default tab.
    pub fn from_query(tab: Option<&str>) -> Self {
        Self::new(tab.and_then(|t| t.parse().ok()).unwrap_or_default())
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Make `tab` the only active tab.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
