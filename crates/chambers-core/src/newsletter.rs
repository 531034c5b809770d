//! Newsletter subscription form state.
//!
//! The form collects an email, validates its shape, and turns the
//! subscription store's reply into a [`Notice`]. Sending the request and
//! dismissing notices on a timer are left to the host.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SubscribeError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// HTTP status the subscription store uses for a duplicate address.
pub const STATUS_ALREADY_SUBSCRIBED: u16 = 409;

/// Request body sent to the subscription store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Successful replies from the subscription store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

/// Message shown under the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Subscribed,
    AlreadySubscribed,
    Failed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Subscribed => "Thank you for subscribing!",
            Self::AlreadySubscribed => "You're already subscribed to our newsletter.",
            Self::Failed(msg) => msg,
        }
    }

    /// Success notices fade on their own; failures stay until the next try.
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Maps the store's HTTP reply to an outcome.
///
/// `409` means the address is already on the list. Any other non-2xx status
/// is a rejection carrying the server's `error` message when it sent one.
pub fn outcome_from_response(status: u16, body: &str) -> Result<SubscribeOutcome, SubscribeError> {
    match status {
        STATUS_ALREADY_SUBSCRIBED => Ok(SubscribeOutcome::AlreadySubscribed),
        200..=299 => Ok(SubscribeOutcome::Subscribed),
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            Err(SubscribeError::Rejected(message))
        }
    }
}

/// Checks an email address for the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), SubscribeError> {
    if email.is_empty() {
        return Err(SubscribeError::EmptyEmail);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(SubscribeError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Form state for the footer and contact-page subscription forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    notice: Option<Notice>,
    pending: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Starts a submission, returning the request to send.
    ///
    /// Returns `None` when nothing should be sent: the field is empty or a
    /// request is already in flight. A malformed address sets a failure
    /// notice instead.
    pub fn begin_submit(&mut self) -> Option<SubscribeRequest> {
        if self.pending {
            return None;
        }
        let email = self.email.trim();
        match validate_email(email) {
            Ok(()) => {
                let request = SubscribeRequest {
                    email: email.to_string(),
                };
                self.notice = None;
                self.pending = true;
                Some(request)
            }
            Err(SubscribeError::EmptyEmail) => None,
            Err(e) => {
                self.notice = Some(Notice::Failed(e.to_string()));
                None
            }
        }
    }

    /// Records the reply to the submission started by [`Self::begin_submit`].
    pub fn complete(&mut self, result: Result<SubscribeOutcome, SubscribeError>) {
        self.pending = false;
        self.notice = Some(match result {
            Ok(SubscribeOutcome::Subscribed) => {
                self.email.clear();
                Notice::Subscribed
            }
            Ok(SubscribeOutcome::AlreadySubscribed) => Notice::AlreadySubscribed,
            Err(e) => Notice::Failed(e.to_string()),
        });
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            outcome_from_response(201, "{}"),
            Ok(SubscribeOutcome::Subscribed)
        );
        assert_eq!(
            outcome_from_response(409, r#"{"error":"exists"}"#),
            Ok(SubscribeOutcome::AlreadySubscribed)
        );
        assert_eq!(
            outcome_from_response(400, r#"{"error":"Invalid email"}"#),
            Err(SubscribeError::Rejected("Invalid email".into()))
        );
        assert_eq!(
            outcome_from_response(500, "<html>"),
            Err(SubscribeError::Rejected(GENERIC_FAILURE.into()))
        );
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), Err(SubscribeError::EmptyEmail));
        assert!(validate_email("counsel@firm.co.ke").is_ok());
        assert!(matches!(
            validate_email("not-an-email"),
            Err(SubscribeError::InvalidEmail(_))
        ));
        assert!(validate_email("two words@firm.com").is_err());
    }

    #[test]
    fn test_empty_email_sends_nothing() {
        let mut form = NewsletterForm::new();
        form.set_email("   ");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn test_invalid_email_shows_notice() {
        let mut form = NewsletterForm::new();
        form.set_email("nope");
        assert_eq!(form.begin_submit(), None);
        assert!(matches!(form.notice(), Some(Notice::Failed(_))));
    }

    #[test]
    fn test_successful_subscription_clears_email() {
        let mut form = NewsletterForm::new();
        form.set_email(" client@example.com ");

        let request = form.begin_submit().unwrap();
        assert_eq!(request.email, "client@example.com");
        assert!(form.is_pending());
        assert_eq!(form.begin_submit(), None, "no double submit while pending");

        form.complete(Ok(SubscribeOutcome::Subscribed));
        assert!(!form.is_pending());
        assert_eq!(form.email(), "");
        assert_eq!(form.notice(), Some(&Notice::Subscribed));
        assert!(form.notice().unwrap().auto_dismiss());
    }

    #[test]
    fn test_already_subscribed_keeps_email() {
        let mut form = NewsletterForm::new();
        form.set_email("client@example.com");
        form.begin_submit().unwrap();
        form.complete(Ok(SubscribeOutcome::AlreadySubscribed));

        assert_eq!(form.email(), "client@example.com");
        assert_eq!(form.notice(), Some(&Notice::AlreadySubscribed));
    }

    #[test]
    fn test_transport_failure_notice() {
        let mut form = NewsletterForm::new();
        form.set_email("client@example.com");
        form.begin_submit().unwrap();
        form.complete(Err(FetchError::Timeout.into()));

        let notice = form.notice().unwrap();
        assert!(!notice.auto_dismiss());
        assert_eq!(
            notice.message(),
            "Failed to subscribe. Please try again later."
        );

        form.dismiss();
        assert_eq!(form.notice(), None);
    }
}
