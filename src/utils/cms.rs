//! Typed access to the CMS REST API.
//!
//! Pages and team profiles are read with Payload-style `where` queries and
//! cached per session through [`fetch_json_cached`].

use chambers_core::content::{AttorneyProfile, Docs, Page};
use chambers_core::error::ContentError;

use crate::config::{CMS_API_URL, CMS_DEPTH, TEAM_FETCH_LIMIT, cache};
use crate::utils::fetch_json_cached;

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

fn by_slug_url(collection: &str, slug: &str) -> String {
    format!(
        "{}/{}?where[slug][equals]={}&depth={}&limit=1",
        CMS_API_URL,
        collection,
        encode(slug),
        CMS_DEPTH
    )
}

/// Load the page document with `slug`, blocks populated.
pub async fn fetch_page(slug: &str) -> Result<Page, ContentError> {
    let url = by_slug_url("pages", slug);
    let key = format!("{}{}", cache::PAGE_KEY_PREFIX, slug);
    let docs: Docs<Page> = fetch_json_cached(&url, &key).await?;
    docs.into_first()
        .ok_or_else(|| ContentError::PageNotFound(slug.to_string()))
}

/// Load a single team profile by slug.
pub async fn fetch_member(slug: &str) -> Result<AttorneyProfile, ContentError> {
    let url = by_slug_url("team", slug);
    let key = format!("{}{}", cache::MEMBER_KEY_PREFIX, slug);
    let docs: Docs<AttorneyProfile> = fetch_json_cached(&url, &key).await?;
    docs.into_first()
        .ok_or_else(|| ContentError::MemberNotFound(slug.to_string()))
}

/// Load the whole roster, in CMS order.
pub async fn fetch_team() -> Result<Vec<AttorneyProfile>, ContentError> {
    let url = format!(
        "{}/team?limit={}&depth={}",
        CMS_API_URL, TEAM_FETCH_LIMIT, CMS_DEPTH
    );
    let docs: Docs<AttorneyProfile> = fetch_json_cached(&url, cache::TEAM_KEY).await?;
    tracing::debug!(count = docs.docs.len(), "team roster loaded");
    Ok(docs.docs)
}
