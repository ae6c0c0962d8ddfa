//! Contact-information shape checks.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)").unwrap()
});

/// Optional country code, then 3-3-4 ASCII digits with `-`, `.` or space separators.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactSignals {
    pub has_email: bool,
    pub has_phone: bool,
}

impl ContactSignals {
    pub fn is_complete(&self) -> bool {
        self.has_email && self.has_phone
    }
}

/// Checks for email- and phone-shaped tokens. Shape only, no validation.
pub fn detect_contact(text: &str) -> ContactSignals {
    ContactSignals {
        has_email: EMAIL_RE.is_match(text),
        has_phone: PHONE_RE.is_match(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_contact() {
        assert_eq!(detect_contact(""), ContactSignals::default());
    }

    #[test]
    fn test_email_detected() {
        assert!(detect_contact("reach me at jane.doe+cv@mail.example.org").has_email);
        assert!(detect_contact("john@x.com").has_email);
    }

    #[test]
    fn test_malformed_email_rejected() {
        assert!(!detect_contact("jane@localhost").has_email);
        assert!(!detect_contact("@example.com").has_email);
    }

    #[test]
    fn test_phone_formats() {
        for phone in ["555-123-4567", "(555) 123-4567", "+1 555.123.4567", "5551234567"] {
            assert!(detect_contact(phone).has_phone, "expected phone in {phone}");
        }
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        assert!(detect_contact("éjohn@x.com").has_email);
        assert!(detect_contact("Email:jane.doe@mail.example.org").has_email);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_phone() {
        assert!(!detect_contact("٥٥٥-١٢٣-٤٥٦٧").has_phone);
    }

    #[test]
    fn test_short_number_is_not_a_phone() {
        assert!(!detect_contact("call 123-4567").has_phone);
    }

    #[test]
    fn test_complete_requires_both() {
        let signals = detect_contact("john@x.com 555-123-4567");
        assert!(signals.is_complete());
        assert!(!detect_contact("john@x.com").is_complete());
    }
}
