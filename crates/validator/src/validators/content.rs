//! String content validators
//!
//! Validators for email addresses and URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Longest local part (the text before the first `@`) an address may carry.
pub const EMAIL_LOCAL_PART_MAX: usize = 64;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.+_-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

// Loopback, link-local and RFC 1918 hosts are excluded by spelling out the
// public octet ranges: the first octet skips 10 and 127, and 169, 172 and 192
// only pair with second octets outside 254, 16-31 and 168.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:(?:https?|ftp):)?//)",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?:",
        r"(?:[1-9]|1[1-9]|[2-9][0-9]|1[01][0-9]|12[0-689]|1[3-5][0-9]|16[0-8]|17[013-9]|18[0-9]|19[013-9]|2[01][0-9]|22[0-3])",
        r"(?:\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}",
        r"|169\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-35])\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])",
        r"|172\.(?:[0-9]|0[0-9]|1[0-5]|3[2-9]|[4-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])",
        r"|192\.(?:[0-9]{1,2}|1[0-57-9][0-9]|16[0-79]|2[0-4][0-9]|25[0-5])\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])",
        r")",
        r"(?:\.(?:[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))",
        r"|",
        r"(?:(?:[a-z\x{00a1}-\x{10ffff}0-9]-*)*[a-z\x{00a1}-\x{10ffff}0-9]+)",
        r"(?:\.(?:[a-z\x{00a1}-\x{10ffff}0-9]-*)*[a-z\x{00a1}-\x{10ffff}0-9]+)*",
        r"(?:\.(?:[a-z\x{00a1}-\x{10ffff}]{2,}))[^\n\r\x{2028}\x{2029}]?",
        r")",
        r"(?::[0-9]{2,5})?",
        r"(?:[/?#]\S*)?$",
    ))
    .expect("url pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// The local part is limited to 64 characters; each domain label to 63.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::email;
    ///
    /// assert!(email("test.user@domain.com"));
    /// assert!(email("testuser@do-main.gov.uk"));
    /// assert!(!email("test user@domain.com"));
    /// assert!(!email("testuser.domain.com"));
    /// ```
    pub Email;
    rule(input) { input.as_text().is_some_and(|text| is_email(&text)) }
    fn email;
}

fn is_email(text: &str) -> bool {
    let local_part = text.split('@').next().unwrap_or_default();
    local_part.chars().count() <= EMAIL_LOCAL_PART_MAX && EMAIL_REGEX.is_match(text)
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an absolute `http`, `https` or `ftp` URL, or a
    /// protocol-relative one (`//host`).
    ///
    /// Hosts must be either a public dotted-quad address or a domain with a
    /// top-level label of at least two letters. Loopback, link-local and
    /// RFC 1918 addresses are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::url;
    ///
    /// assert!(url("https://www.google.com"));
    /// assert!(url("//www.google.com"));
    /// assert!(url("http://121.0.0.1"));
    /// assert!(!url("www.google.com"));
    /// assert!(!url("http://localhost"));
    /// assert!(!url("http://192.168.0.1"));
    /// ```
    pub Url matches URL_REGEX;
    fn url;
}

// ============================================================================
// TESTS
// ============================================================================
