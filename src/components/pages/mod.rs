//! Route-level pages.
//!
//! - [`CmsPage`] - a CMS page rendered block by block
//! - [`TeamMemberPage`] - a single attorney profile
//! - [`NotFound`] - anything the router does not recognise

mod cms_page;
mod not_found;
mod team_member;

pub use cms_page::CmsPage;
pub use not_found::NotFound;
pub use team_member::TeamMemberPage;

use chambers_core::error::ContentError;
use leptos::prelude::*;

use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Placeholder shown while a page's content is loading.
#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class=css::status>
            <span class=css::spinner />
            <p class=css::statusText>"Loading..."</p>
        </div>
    }
}

/// Notice for content that failed to load.
#[component]
fn ContentFailure(error: ContentError) -> impl IntoView {
    tracing::warn!(error = %error, "content unavailable");
    let (title, detail) = match &error {
        ContentError::PageNotFound(_) | ContentError::MemberNotFound(_) => {
            ("Page not found", "The page you are looking for does not exist.")
        }
        ContentError::Fetch(_) => (
            "Content unavailable",
            "We could not load this page. Please check your connection and try again.",
        ),
    };

    view! {
        <div class=css::status>
            <h1 class=css::statusTitle>{title}</h1>
            <p class=css::statusText>{detail}</p>
            <a class=css::statusLink href=AppRoute::Home.to_hash()>"Return Home"</a>
        </div>
    }
}
