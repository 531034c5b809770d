//! Contact form.
//!
//! Inquiries are handed to the visitor's mail client rather than stored, so
//! this module only validates the fields and composes the message.

use crate::error::InquiryError;
use crate::newsletter::validate_email;

/// Which panel the contact section shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactTab {
    #[default]
    Form,
    Newsletter,
}

impl ContactTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Form => "Send a Message",
            Self::Newsletter => "Newsletter",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Inquiry {
    /// Checks required fields. Phone is optional.
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.trim().is_empty() {
            return Err(InquiryError::MissingName);
        }
        if validate_email(self.email.trim()).is_err() {
            return Err(InquiryError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(InquiryError::MissingMessage);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Inquiry from {}", self.name.trim())
    }

    /// Plain-text body: the message followed by the sender's details.
    pub fn body(&self) -> String {
        let mut body = format!(
            "{}\n\n--\n{}\n{}",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        let phone = self.phone.trim();
        if !phone.is_empty() {
            body.push('\n');
            body.push_str(phone);
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Inquiry {
        Inquiry {
            name: " Jane Client ".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            message: "I need advice on a lease.".into(),
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(filled().validate(), Ok(()));

        let mut inquiry = filled();
        inquiry.name = "  ".into();
        assert_eq!(inquiry.validate(), Err(InquiryError::MissingName));

        let mut inquiry = filled();
        inquiry.email = "jane".into();
        assert_eq!(inquiry.validate(), Err(InquiryError::InvalidEmail));

        let mut inquiry = filled();
        inquiry.message.clear();
        assert_eq!(inquiry.validate(), Err(InquiryError::MissingMessage));
    }

    #[test]
    fn test_message_composition() {
        let mut inquiry = filled();
        assert_eq!(inquiry.subject(), "Inquiry from Jane Client");
        assert_eq!(
            inquiry.body(),
            "I need advice on a lease.\n\n--\nJane Client\njane@example.com"
        );

        inquiry.phone = "+254 700 000000".into();
        assert!(inquiry.body().ends_with("\njane@example.com\n+254 700 000000"));
    }

    #[test]
    fn test_default_tab_is_form() {
        assert_eq!(ContactTab::default(), ContactTab::Form);
    }
}
