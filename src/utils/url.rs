//! URL validation and link building.
//!
//! Social links come straight from CMS editors, so they are checked against
//! a domain whitelist before they are rendered as outbound anchors.

use crate::config::ALLOWED_LINK_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to link to
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

impl UrlValidation {
    /// The validated URL, logging why a rejected one was dropped.
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Valid(url) => Some(url),
            Self::Invalid(reason) => {
                tracing::warn!(%reason, "dropping outbound link");
                None
            }
        }
    }
}

/// Validate an outbound link.
///
/// Accepts `http(s)` URLs whose host is one of [`ALLOWED_LINK_DOMAINS`]
/// or a subdomain of one. A bare `www.` prefix is ignored when matching.
pub fn validate_external_link(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = extract_host(&url_lower) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract the lowercase host from an already-lowercased URL.
fn extract_host(url: &str) -> Option<String> {
    let without_protocol = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    let host_part = without_protocol.split(['/', '?', '#']).next()?;
    // userinfo and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_LINK_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
}

/// Build a `mailto:` link with an encoded subject and body.
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    let subject = String::from(js_sys::encode_uri_component(subject));
    let body = String::from(js_sys::encode_uri_component(body));
    format!("mailto:{}?subject={}&body={}", to.trim(), subject, body)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::mailto_link;

    #[wasm_bindgen_test]
    fn test_mailto_link_encodes_fields() {
        assert_eq!(
            mailto_link("info@firm.co.ke", "Inquiry: Jane & Co", "Hello\nthere"),
            "mailto:info@firm.co.ke?subject=Inquiry%3A%20Jane%20%26%20Co&body=Hello%0Athere"
        );
    }
}
