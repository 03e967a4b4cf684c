//! Phone number validator for loosely formatted numbers.
//!
//! Accepts an optional country code and an optional parenthesised area code
//! followed by digits separated by spaces or dashes.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, Value};

static TEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]{1,5})?( ?\([0-9]{1,5}\) ?)?[0-9 -]+$").expect("tel pattern is valid")
});

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers with or without a country code.
///
/// Digits may be grouped with spaces or dashes and the area code may be
/// wrapped in parentheses. Longer values than [`Tel::DEFAULT_MAX_LENGTH`]
/// characters are rejected unless the limit is raised.
///
/// Pass numbers as text: a numeric value loses its leading zeros.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Tel;
/// use formcheck::foundation::Validate;
///
/// let tel = Tel::new();
/// assert!(tel.check("+44 (0)20 7684 8444"));
/// assert!(tel.check("82 011-111-1111"));
/// assert!(!tel.check("+1.646.847.9415"));
///
/// // 26 characters: too long for the default limit
/// assert!(!tel.check("+852 5239 8278432413434346"));
/// assert!(Tel::new().max_length(32).check("+852 5239 8278432413434346"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tel {
    max_length: usize,
}

impl Tel {
    /// Maximum number of characters accepted by default.
    pub const DEFAULT_MAX_LENGTH: usize = 20;

    /// Creates a phone validator with the default length limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the maximum number of characters allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    fn validate_text(&self, input: &str) -> bool {
        input.chars().count() <= self.max_length && TEL_REGEX.is_match(input)
    }
}

impl Default for Tel {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Tel {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        value
            .as_text()
            .is_some_and(|text| self.validate_text(&text))
    }
}

/// Returns `true` if `value` is a phone number accepted by [`Tel::new`].
#[must_use]
pub fn tel<'a>(value: impl Into<Value<'a>>) -> bool {
    Tel::new().check(value)
}

// ============================================================================
// TESTS
// ============================================================================
