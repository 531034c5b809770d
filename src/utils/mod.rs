//! Utility modules for web, DOM, and content operations.
//!
//! Provides:
//! - [`fetch_json_cached`], [`post_json`] - Network fetching with timeout and session caching
//! - [`cms`] - Typed page and profile loading from the CMS
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`validate_external_link`] - Outbound link validation
//! - [`TimerSlot`] - Owned, cancellable browser timers

pub mod cache;
pub mod cms;
pub mod dom;
mod fetch;
mod markdown;
mod timer;
mod url;

pub use fetch::{fetch_json_cached, post_json};
pub use markdown::markdown_to_html;
pub use timer::TimerSlot;
pub use url::{mailto_link, validate_external_link};
