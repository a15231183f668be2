//! Email address grammar check and domain extraction.
//!
//! The grammar is the common RFC 5322 subset: an atext local part, one `@`,
//! then dot-separated DNS labels.

mod domain;
mod types;

pub use types::{EmailAddress, EmailError};

use std::sync::LazyLock;

use regex::Regex;

use domain::{is_valid_label, split_at_sign};

static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+$").expect("local-part pattern compiles")
});

/// Validate `input` and return an [`EmailAddress`].
///
/// The input is taken as-is, surrounding whitespace is rejected.
pub fn parse_email(input: &str) -> Result<EmailAddress, EmailError> {
    if input.is_empty() {
        return Err(EmailError::Missing);
    }

    let at = split_at_sign(input).ok_or_else(|| EmailError::invalid(input))?;
    let (local, domain) = (&input[..at], &input[at + 1..]);

    if !LOCAL_PART.is_match(local) {
        return Err(EmailError::invalid(input));
    }
    if !domain.split('.').all(is_valid_label) {
        return Err(EmailError::invalid(input));
    }

    Ok(EmailAddress::from_validated(input.to_string(), at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_basic() {
        let email = parse_email("alice@example.com").unwrap();
        assert_eq!(email.local_part(), "alice");
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn accepts_atext_specials_and_single_label() {
        assert!(parse_email("o'brien+tag/x=y@example.co.uk").is_ok());
        assert!(parse_email("{weird}|~`^@localhost").is_ok());
        assert!(parse_email("a@b").is_ok());
    }

    #[test]
    fn rejects_empty_as_missing() {
        assert_eq!(parse_email(""), Err(EmailError::Missing));
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "alice",
            "alice@",
            "@example.com",
            "a@@example.com",
            "a@b@example.com",
            "a b@example.com",
            "alice@exa mple.com",
            "alice@-example.com",
            "alice@example-.com",
            "alice@example..com",
            "alice@example.com.",
            "alice@.example.com",
            "alice@exam_ple.com",
            " alice@example.com",
            "alice@example.com ",
            "al(ice)@example.com",
        ] {
            let err = parse_email(bad).expect_err(bad);
            assert!(matches!(err, EmailError::InvalidFormat { .. }), "{bad}");
        }
    }

    #[test]
    fn rejects_overlong_label() {
        let long = format!("a@{}.com", "x".repeat(64));
        assert!(parse_email(&long).is_err());
        let ok = format!("a@{}.com", "x".repeat(63));
        assert!(parse_email(&ok).is_ok());
    }

    #[test]
    fn invalid_error_carries_input() {
        let err = parse_email("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid email address 'nope'");
    }

    #[test]
    fn from_str_matches_parse() {
        let email: EmailAddress = "bob@contoso.com".parse().unwrap();
        assert_eq!(email, parse_email("bob@contoso.com").unwrap());
        assert_eq!(email.to_string(), "bob@contoso.com");
    }

    proptest! {
        #[test]
        fn strings_without_at_are_rejected(s in "[^@]*") {
            prop_assert!(parse_email(&s).is_err());
        }

        #[test]
        fn domain_is_text_after_the_at(
            local in "[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]{1,20}",
            labels in proptest::collection::vec("[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?", 1..4),
        ) {
            let domain = labels.join(".");
            let raw = format!("{local}@{domain}");
            let email = parse_email(&raw).unwrap();
            prop_assert_eq!(email.domain(), domain.as_str());
            prop_assert_eq!(email.local_part(), local.as_str());
        }

        #[test]
        fn bad_characters_in_domain_are_rejected(
            local in "[a-z]{1,8}",
            bad in "[_!#$ ]",
        ) {
            let raw = format!("{local}@exa{bad}mple.com");
            prop_assert!(parse_email(&raw).is_err());
        }
    }
}
