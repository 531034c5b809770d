//! Pages assembled from CMS layout blocks.

use chambers_core::content::{Block, ContactBlock, Page};
use leptos::prelude::*;

use super::{ContentFailure, Loading};
use crate::components::blocks::{BlockView, ContactSection};
use crate::utils::cms;

/// Renders the CMS page stored under `slug`.
///
/// With `ensure_contact`, a contact section with default details follows the
/// layout when the page has none of its own.
#[component]
pub fn CmsPage(slug: &'static str, #[prop(optional)] ensure_contact: bool) -> impl IntoView {
    let page = LocalResource::new(move || cms::fetch_page(slug));

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || {
                page.get().map(|result| match result {
                    Ok(page) => view! { <PageBlocks page=page ensure_contact=ensure_contact /> }.into_any(),
                    Err(error) => view! { <ContentFailure error=error /> }.into_any(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn PageBlocks(page: Page, ensure_contact: bool) -> impl IntoView {
    let needs_contact =
        ensure_contact && !page.layout.iter().any(|b| matches!(b, Block::Contact(_)));
    tracing::debug!(slug = %page.slug, blocks = page.layout.len(), "rendering page");

    view! {
        {page
            .layout
            .into_iter()
            .map(|block| view! { <BlockView block=block /> })
            .collect_view()}
        {needs_contact.then(|| view! { <ContactSection block=ContactBlock::default() /> })}
    }
}
