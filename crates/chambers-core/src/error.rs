//! Error types for the site.
//!
//! Each fallible edge of the front end gets its own error domain:
//!
//! - [`FetchError`] - network/fetch failures talking to the CMS
//! - [`ContentError`] - missing or undecodable CMS content
//! - [`SubscribeError`] - newsletter form validation and submission
//! - [`InquiryError`] - contact form validation
//!
//! The filter and carousel engines never fail, so they have no error type.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Errors resolving CMS content for a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// No page document carries the requested slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),
    /// No team profile carries the requested slug.
    #[error("Team member not found: {0}")]
    MemberNotFound(String),
    /// The content source could not be reached or decoded.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Newsletter subscription errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// Submitted with an empty email field.
    #[error("Please enter your email address.")]
    EmptyEmail,
    /// Email does not look like `local@domain.tld`.
    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),
    /// The subscription store refused the request.
    #[error("{0}")]
    Rejected(String),
    /// The request never reached the subscription store.
    #[error("Failed to subscribe. Please try again later.")]
    Transport(#[from] FetchError),
}

/// Contact form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please describe how we can help.")]
    MissingMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_content_error_is_transparent_over_fetch() {
        let err = ContentError::from(FetchError::Http(500));
        assert_eq!(err.to_string(), "HTTP error: 500");
    }

    #[test]
    fn test_subscribe_transport_message_hides_details() {
        let err = SubscribeError::from(FetchError::Network("offline".into()));
        assert_eq!(
            err.to_string(),
            "Failed to subscribe. Please try again later."
        );
    }
}
