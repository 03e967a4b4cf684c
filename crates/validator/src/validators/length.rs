//! String length validators
//!
//! Length is measured in Unicode scalar values (chars). Numbers are measured
//! on their rendered form, so `11` has length 2.

use crate::foundation::{Validate, Value, format_number};

/// Measures the length of a text or number value.
fn measure(value: &Value<'_>) -> Option<usize> {
    match value {
        Value::Text(text) => Some(text.chars().count()),
        Value::Number(n) => Some(format_number(*n).chars().count()),
        _ => None,
    }
}

/// Reads a length limit the way form attributes are read.
///
/// Numbers are truncated toward zero; text contributes its leading,
/// optionally signed run of digits after any leading whitespace, so `"3px"`
/// reads as 3.
fn parse_limit(limit: &Value<'_>) -> Option<i64> {
    match limit {
        Value::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        Value::Text(text) => parse_leading_int(text),
        _ => None,
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }

    // Saturate instead of failing on absurdly long limits
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn length_as_i64(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that a value has at least a minimum length.
///
/// # Examples
///
/// ```
/// use formcheck::validators::MinLength;
/// use formcheck::foundation::Validate;
///
/// let validator = MinLength::new(3);
/// assert!(validator.check("abc"));
/// assert!(validator.check(100));
/// assert!(!validator.check("ab"));
/// assert!(!validator.check(None::<&str>));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    /// Creates a minimum length validator.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validate for MinLength {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        measure(value).is_some_and(|length| length >= self.min)
    }
}

/// Returns `true` if `value` is at least `min` characters long.
///
/// `min` may be a number or numeric text; an unreadable limit imposes no
/// bound.
///
/// # Examples
///
/// ```
/// use formcheck::min_length;
///
/// assert!(min_length("a", 1));
/// assert!(min_length(1, "1"));
/// assert!(!min_length(11, 3));
/// assert!(min_length("abc", "many"));
/// ```
#[must_use]
pub fn min_length<'a, 'b>(value: impl Into<Value<'a>>, min: impl Into<Value<'b>>) -> bool {
    let Some(length) = measure(&value.into()) else {
        return false;
    };
    parse_limit(&min.into()).is_none_or(|min| length_as_i64(length) >= min)
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that a value does not exceed a maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    /// Creates a maximum length validator.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validate for MaxLength {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        measure(value).is_some_and(|length| length <= self.max)
    }
}

/// Returns `true` if `value` is at most `max` characters long.
///
/// Uses the same limit parsing as [`min_length`].
#[must_use]
pub fn max_length<'a, 'b>(value: impl Into<Value<'a>>, max: impl Into<Value<'b>>) -> bool {
    let Some(length) = measure(&value.into()) else {
        return false;
    };
    parse_limit(&max.into()).is_none_or(|max| length_as_i64(length) <= max)
}
