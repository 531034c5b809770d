//! Data models and types for the site shell.
//!
//! Contains:
//! - [`AppRoute`] - hash-based navigation
//! - [`NavItem`] - navbar entries
//!
//! Content records live in [`chambers_core::content`].

mod nav;
mod route;

pub use nav::{NavItem, primary_nav};
pub use route::AppRoute;
