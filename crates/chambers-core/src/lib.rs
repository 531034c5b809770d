//! Browser-free core of the Chambers law-firm site.
//!
//! Provides:
//! - [`directory`] - search and category filtering over a roster
//! - [`carousel`] - paged navigation guarded by a transition lock
//! - [`reducer`] - a single command/effect fold over both engines
//! - [`counter`] - count-up animation for headline statistics
//! - [`newsletter`] - subscription form state
//! - [`inquiry`] - contact form validation and message composition
//! - [`content`] - typed CMS records (pages, blocks, profiles)
//! - [`error`] - error types for the fallible edges

pub mod carousel;
pub mod content;
pub mod counter;
pub mod directory;
pub mod error;
pub mod inquiry;
pub mod newsletter;
pub mod reducer;

pub use carousel::{Carousel, Navigation, PageSize};
pub use directory::{
    Entity, FilterState, compute_visible, toggle_category, unique_categories, visible_cloned,
};
pub use reducer::{Command, Effect, Step, ViewState, reduce};
