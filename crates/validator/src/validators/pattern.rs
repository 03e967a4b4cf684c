//! Character-class and caller-supplied pattern validators
//!
//! This module provides validators for checking string patterns and formats.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Error, Result, Validate, Value};

static ALPHA_NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z]+$").expect("alphanumeric pattern is valid")
});

static COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("color pattern is valid")
});

// ============================================================================
// ALPHANUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a value is made only of ASCII letters and digits.
    ///
    /// The empty string is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::alpha_numeric;
    ///
    /// assert!(alpha_numeric("t35tsTring"));
    /// assert!(!alpha_numeric("t35t sTring"));
    /// assert!(!alpha_numeric("t35t_sTring"));
    /// ```
    pub AlphaNumeric matches ALPHA_NUMERIC_REGEX;
    fn alpha_numeric;
}

// ============================================================================
// COLOR
// ============================================================================

crate::validator! {
    /// Validates a hexadecimal color: `#` followed by exactly 3 or 6 hex digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::color;
    ///
    /// assert!(color("#FFFFFF"));
    /// assert!(color("#fff"));
    /// assert!(!color("FFF"));
    /// assert!(!color("#FFFF"));
    /// ```
    pub Color matches COLOR_REGEX;
    fn color;
}

// ============================================================================
// CALLER-SUPPLIED PATTERN
// ============================================================================

/// Validates a value against a caller-supplied regular expression fragment.
///
/// The fragment is wrapped as `^(?:fragment)$`, so it always has to match
/// the whole value, the same way an HTML `pattern` attribute behaves.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Pattern;
/// use formcheck::foundation::Validate;
///
/// let postcode = Pattern::new("[0-9A-Z]{2,6}([ -]?[0-9A-Z]{2,6})?").unwrap();
/// assert!(postcode.check("E14 3GJ"));
/// assert!(!postcode.check("e14 3gj"));
///
/// assert!(Pattern::new("(").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    fragment: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `fragment` into an anchored pattern.
    pub fn new(fragment: impl Into<String>) -> Result<Self> {
        let fragment = fragment.into();
        match Regex::new(&format!("^(?:{fragment})$")) {
            Ok(regex) => Ok(Self { fragment, regex }),
            Err(source) => Err(Error::invalid_pattern(fragment, source)),
        }
    }

    /// Returns the fragment this pattern was built from.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Validate for Pattern {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        value
            .as_text()
            .is_some_and(|text| self.regex.is_match(&text))
    }
}

/// Tests `value` against the fragment `pattern`.
///
/// Fails only when `pattern` itself is not a valid regular expression.
///
/// # Examples
///
/// ```
/// use formcheck::pattern;
///
/// assert!(pattern("GBR", "[A-Za-z]{3}")?);
/// assert!(!pattern("5676 53456", "^[a-zA-Z0-9]+$")?);
/// assert!(pattern("x", "[").is_err());
/// # Ok::<(), formcheck::Error>(())
/// ```
pub fn pattern<'a>(value: impl Into<Value<'a>>, pattern: &str) -> Result<bool> {
    Ok(Pattern::new(pattern)?.is_valid(&value.into()))
}
