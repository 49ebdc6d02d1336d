//! Contact form handling with a `mailto:` fallback.
//!
//! There is no backend: a valid submission is turned into a `mailto:` link
//! that opens the visitor's email client with subject and body prefilled.

use crate::error::{FolioError, FolioResult};

/// Status shown once the email client is being opened
pub const OPENING_MAIL_CLIENT: &str = "Opening your email app...";

/// A submitted contact form with every field trimmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// All three fields are required
    pub fn validate(&self) -> FolioResult<()> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FolioError::IncompleteForm);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("{}\n\n— {}\n{}", self.message, self.name, self.email)
    }

    /// Validate and build the `mailto:` href addressed to `recipient`.
    pub fn mailto_href(&self, recipient: &str) -> FolioResult<String> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body())
        ))
    }
}

/// Percent-encode `input` the way browsers' `encodeURIComponent` does.
///
/// Unreserved characters are `A-Z a-z 0-9 - _ . ! ~ * ' ( )`; everything
/// else is emitted as uppercase `%XX` per UTF-8 byte.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed() {
        let msg = ContactMessage::new("  Ada ", "ada@example.com\n", "\thello ");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hello");
    }

    #[test]
    fn blank_fields_fail_validation() {
        let msg = ContactMessage::new("Ada", "   ", "hello");
        let err = msg.validate().unwrap_err();
        assert!(matches!(err, FolioError::IncompleteForm));
        assert_eq!(err.to_string(), "Please complete all fields.");
        assert!(msg.mailto_href("me@example.com").is_err());
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's (ok)!*~");
        assert_eq!(encode_uri_component("\n"), "%0A");
        assert_eq!(encode_uri_component("—"), "%E2%80%94");
    }

    #[test]
    fn builds_mailto_href() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hi there");
        let href = msg.mailto_href("me@example.com").unwrap();
        assert_eq!(
            href,
            "mailto:me@example.com?subject=Portfolio%20inquiry%20from%20Ada\
             &body=Hi%20there%0A%0A%E2%80%94%20Ada%0Aada%40example.com"
        );
    }
}
