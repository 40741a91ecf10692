//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI components
//! inspired by shadcn/ui, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`], [`ButtonLink`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardTitle`], [`CardContent`]: Card container
//! - [`Input`], [`Textarea`], [`Field`]: Form fields
//! - [`Badge`]: Status badge/tag
//! - [`Avatar`]: User avatar with initials fallback
//! - [`Separator`]: Visual separator line
//! - [`Table`] and friends: Data tables
//! - [`Tabs`], [`TabsList`], [`TabsTrigger`], [`TabsContent`]: Tabbed panels
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod card;
mod icons;
mod input;
mod separator;
mod table;
mod tabs;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonLink, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, CardTitle};
pub use icons::*;
pub use input::{Field, Input, Textarea};
pub use separator::Separator;
pub use table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
