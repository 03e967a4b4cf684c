//! Credit card number validator with Luhn algorithm.
//!
//! Validates credit card numbers for format and checksum.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, Value};

static CARD_DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+([ -][0-9]+)*$").expect("card digits pattern is valid")
});

// ============================================================================
// CREDIT CARD VALIDATOR
// ============================================================================

/// Validates credit card numbers using the Luhn algorithm.
///
/// Digits may be grouped by single spaces or single dashes. After the
/// separators are stripped the number must have between 12 and 19 digits
/// (configurable) and pass the mod 10 checksum. Card networks are not
/// checked.
///
/// # Examples
///
/// ```
/// use formcheck::validators::CreditCard;
/// use formcheck::foundation::Validate;
///
/// let validator = CreditCard::new();
///
/// assert!(validator.check("4000056655665556"));
/// assert!(validator.check("4012-88888888-1881"));
/// assert!(validator.check("424242424 2424242"));
///
/// assert!(!validator.check("4000056655665555")); // fails Luhn
/// assert!(!validator.check("4012 - 88888888 - 1881")); // loose separators
/// assert!(!validator.check("0")); // too short
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreditCard {
    min_digits: usize,
    max_digits: usize,
}

impl CreditCard {
    /// Fewest digits accepted by default.
    pub const DEFAULT_MIN_DIGITS: usize = 12;
    /// Most digits accepted by default.
    pub const DEFAULT_MAX_DIGITS: usize = 19;

    /// Creates a new credit card validator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_digits: Self::DEFAULT_MIN_DIGITS,
            max_digits: Self::DEFAULT_MAX_DIGITS,
        }
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: usize) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: usize) -> Self {
        self.max_digits = max;
        self
    }

    fn validate_text(&self, input: &str) -> bool {
        if !CARD_DIGITS_REGEX.is_match(input) {
            return false;
        }

        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
        (self.min_digits..=self.max_digits).contains(&digits.len()) && passes_luhn(&digits)
    }
}

impl Default for CreditCard {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for CreditCard {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        value
            .as_text()
            .is_some_and(|text| self.validate_text(&text))
    }
}

/// Mod 10 check over digits in reading order.
fn passes_luhn(digits: &[u32]) -> bool {
    let mut sum = 0;
    let mut double = false;

    // Process digits from right to left
    for &digit in digits.iter().rev() {
        let mut digit = digit;

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// Returns `true` if `value` is a card number accepted by [`CreditCard::new`].
#[must_use]
pub fn credit_card<'a>(value: impl Into<Value<'a>>) -> bool {
    CreditCard::new().check(value)
}
