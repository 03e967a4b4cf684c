//! Finite number validator

use crate::foundation::Value;

/// Parses `text` as a decimal number, ignoring surrounding whitespace.
///
/// Only finite results count; `inf`, `NaN` and overflowing literals yield
/// `None`.
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

crate::validator! {
    /// Validates that a value is a finite number, or text holding one.
    ///
    /// Text is read in decimal notation with an optional sign, fraction and
    /// exponent. Trailing garbage (`"1a"`) is rejected, as are hexadecimal
    /// literals.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::number;
    ///
    /// assert!(number(1.1));
    /// assert!(number("-1"));
    /// assert!(number(" 2.5e3 "));
    /// assert!(!number("1a"));
    /// assert!(!number(f64::INFINITY));
    /// assert!(!number(true));
    /// ```
    pub Number;
    rule(input) {
        match input {
            Value::Number(n) => n.is_finite(),
            Value::Text(text) => parse_finite(text).is_some(),
            _ => false,
        }
    }
    fn number;
}
