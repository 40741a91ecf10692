//! UI components and pages.
//!
//! This module provides Leptos SSR components for rendering the practice
//! site, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Document shell and shared pages
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`pages`]: Landing, dashboard and account pages
//! - [`render`]: Full-page rendering to HTML strings

pub mod app;
pub mod components;
pub mod pages;
pub mod render;

pub use render::{DashboardView, render_auth, render_dashboard, render_landing, render_not_found};
