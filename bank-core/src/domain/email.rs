//! Email address validation
//!
//! This is a fixed exclusion list, not an RFC 5321 grammar. Addresses that
//! any real mail system would accept can still be rejected here, and the
//! rules must stay exactly as they are so stored accounts keep validating.

/// Characters that may not appear anywhere in an address
const FORBIDDEN_CHARS: &[char] = &[
    '#', '$', '%', '^', '&', '*', '(', ')', '=', '+', '!', '~',
];

/// Characters the local part may not end with
const FORBIDDEN_PREFIX_ENDINGS: &[char] = &['-', '_', '.'];

/// Minimum length of the top-level domain (text after the last dot)
const MIN_TLD_LEN: usize = 2;

/// Check whether an email address is acceptable as an account identifier
pub fn is_email_valid(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }

    if email.starts_with('.') {
        return false;
    }

    if email.contains(' ') {
        return false;
    }

    if email.contains(FORBIDDEN_CHARS) {
        return false;
    }

    // Exactly one '@'
    let (prefix, domain) = match email.split_once('@') {
        Some((prefix, domain)) if !domain.contains('@') => (prefix, domain),
        _ => return false,
    };

    if prefix.is_empty() || domain.is_empty() {
        return false;
    }

    if prefix.ends_with(FORBIDDEN_PREFIX_ENDINGS) {
        return false;
    }

    if email.contains("..") {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.chars().count() >= MIN_TLD_LEN,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_addresses() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("abc@mail.com"));
        assert!(is_email_valid("abc-d@mail.com"));
        assert!(is_email_valid("abc.def@mail.com"));
        assert!(is_email_valid("abc_def@mail.com"));
        assert!(is_email_valid("abc.de__f--123@mail.com"));
    }

    #[test]
    fn test_empty_and_missing_parts() {
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("@b.com"));
        assert!(!is_email_valid("@mail.com"));
        assert!(!is_email_valid("abc@"));
        assert!(!is_email_valid("invalid.email"));
    }

    #[test]
    fn test_at_sign_count() {
        assert!(!is_email_valid("abc.def@@mail.com"));
        assert!(!is_email_valid("abc.def@@mail"));
        assert!(!is_email_valid("a@b@c.com"));
    }

    #[test]
    fn test_leading_dot_and_consecutive_dots() {
        assert!(!is_email_valid(".abc@mail.com"));
        assert!(!is_email_valid("abc..def@mail.com"));
        assert!(!is_email_valid("abc.def@mail..com"));
        assert!(!is_email_valid("abc..def@mail..com"));
    }

    #[test]
    fn test_prefix_endings() {
        assert!(!is_email_valid("abc-@mail.com"));
        assert!(!is_email_valid("abc_@mail.com"));
        assert!(!is_email_valid("abc.@mail.com"));
        assert!(!is_email_valid("-_@mail.com"));
        assert!(!is_email_valid("-name_@mail.com"));
    }

    #[test]
    fn test_forbidden_characters() {
        assert!(!is_email_valid("abc def@mail.com"));
        assert!(!is_email_valid("abc#def@mail.com"));
        assert!(!is_email_valid("abc.def@mail#archive.com"));
        assert!(!is_email_valid("abc.def@mail.c#om"));
        assert!(!is_email_valid("((@mail.com"));
        for c in FORBIDDEN_CHARS {
            assert!(!is_email_valid(&format!("ab{}c@mail.com", c)), "{}", c);
        }
    }

    #[test]
    fn test_domain_and_tld() {
        assert!(!is_email_valid("a@b"));
        assert!(!is_email_valid("abc.def@mail"));
        assert!(!is_email_valid("abc.def@mailcom"));
        assert!(!is_email_valid("abc@mail.c"));
        assert!(!is_email_valid("abc@mail."));
        assert!(is_email_valid("abc@mail.cc"));
        assert!(is_email_valid("abc@a.com"));
        assert!(is_email_valid("abc.def@mail-archive.com"));
        assert!(is_email_valid("abc.def@mail.org"));
        assert!(is_email_valid("abc.def@mail.c-o_m"));
    }
}
