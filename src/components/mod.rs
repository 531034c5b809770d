//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`pages`] - Route-level pages
//! - [`blocks`] - One component per CMS layout block
//! - [`navigation`] - Navbar and footer
//! - [`carousel`] - Paged carousel controls
//! - [`newsletter`] - Subscription form
//! - [`hooks`] - Directory view and timer hooks
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`social`] - Validated social profile links

pub mod blocks;
pub mod carousel;
pub mod hooks;
pub mod icons;
pub mod navigation;
pub mod newsletter;
pub mod pages;
pub mod router;
pub mod social;

pub use router::AppRouter;
