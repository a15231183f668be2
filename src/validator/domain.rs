/// Splits a validated address on its first `@`.
///
/// Returns `None` when there is no `@`, which the grammar check rules out
/// before this is ever called on user input.
pub(crate) fn split_at_sign(address: &str) -> Option<usize> {
    address.find('@')
}

/// Label rule: 1..=63 alphanumerics or hyphens, no leading/trailing hyphen.
pub(crate) fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_limits() {
        assert!(is_valid_label("example"));
        assert!(is_valid_label("a"));
        assert!(is_valid_label(&"a".repeat(63)));
        assert!(!is_valid_label(&"a".repeat(64)));
        assert!(!is_valid_label(""));
    }

    #[test]
    fn label_hyphens() {
        assert!(is_valid_label("my-domain"));
        assert!(!is_valid_label("-lead"));
        assert!(!is_valid_label("trail-"));
        assert!(!is_valid_label("under_score"));
    }

    #[test]
    fn split_uses_first_at() {
        assert_eq!(split_at_sign("alice@example.com"), Some(5));
        assert_eq!(split_at_sign("nope"), None);
    }
}
