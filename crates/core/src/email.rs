//! Email address normalization and syntax validation.
//!
//! The directory stores emails lowercase; every lookup and insert goes
//! through [`normalize`] first so `User@Example.com` and `user@example.com`
//! resolve to the same row.

use validator::ValidateEmail;

/// Normalize an email address for directory storage and lookup.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check an address against the standard email-address grammar.
pub fn is_valid(email: &str) -> bool {
    email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize("plain@host.org"), "plain@host.org");
    }

    #[test]
    fn test_valid_addresses_pass() {
        assert!(is_valid("user@user.com"));
        assert!(is_valid("first.last+tag@sub.example.co"));
    }

    #[test]
    fn test_invalid_addresses_fail() {
        assert!(!is_valid("not-an-email"));
        assert!(!is_valid("missing-at.example.com"));
        assert!(!is_valid("user@"));
        assert!(!is_valid("@host.com"));
        assert!(!is_valid(""));
    }
}
