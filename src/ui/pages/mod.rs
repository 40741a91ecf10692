//! Page bodies.

pub mod auth;
pub mod dashboard;
pub mod landing;

pub use auth::{AuthForm, AuthPage};
pub use dashboard::{AccessDenied, DashboardLoading, DashboardWorkspace, WorkspaceData};
pub use landing::LandingPage;
