//! View-state selection.
//!
//! Pure functions from session and request data to what the views render.
//!
//! - [`dashboard`]: `Loading → Unauthorized → Authorized` gate and initials
//! - [`nav`]: landing page authenticated/anonymous variant
//! - [`workspace`]: dashboard tab selection

pub mod dashboard;
pub mod nav;
pub mod workspace;

pub use dashboard::{DashboardState, first_name, user_initials};
pub use nav::{NavVariant, nav_variant};
pub use workspace::{Tab, Workspace};
