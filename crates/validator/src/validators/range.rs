//! Range and equality comparators
//!
//! [`min`] and [`max`] compare form values the way users read them: two
//! values of equal rendered length compare as given (so ISO dates order
//! chronologically), while values of different length compare numerically
//! whenever they hold numbers (so `"8"` is below `"20"`).

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::foundation::{Validate, Value, format_number};
use crate::validators::number::parse_finite;

// ============================================================================
// OPERANDS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Operand<'a> {
    Text(Cow<'a, str>),
    Number(f64),
}

impl<'a> Operand<'a> {
    fn from_value(value: &'a Value<'_>) -> Option<Self> {
        match value {
            Value::Text(text) => Some(Operand::Text(Cow::Borrowed(text.as_ref()))),
            Value::Number(n) => Some(Operand::Number(*n)),
            _ => None,
        }
    }

    fn rendered_len(&self) -> usize {
        match self {
            Operand::Text(text) => text.chars().count(),
            Operand::Number(n) => format_number(*n).chars().count(),
        }
    }

    fn into_numeric(self) -> Self {
        let parsed = match &self {
            Operand::Text(text) => parse_finite(text),
            Operand::Number(_) => None,
        };
        parsed.map_or(self, Operand::Number)
    }
}

/// Pairs up two text or number operands, switching to numbers when their
/// rendered lengths differ. `None` if either side is another kind of value.
fn operands<'v>(value: &'v Value<'_>, bound: &'v Value<'_>) -> Option<(Operand<'v>, Operand<'v>)> {
    let left = Operand::from_value(value)?;
    let right = Operand::from_value(bound)?;

    if left.rendered_len() == right.rendered_len() {
        Some((left, right))
    } else {
        Some((left.into_numeric(), right.into_numeric()))
    }
}

/// Orders two operands; non-numeric text against a number and `NaN` have no
/// order.
fn order(left: Operand<'_>, right: Operand<'_>) -> Option<Ordering> {
    match (left, right) {
        (Operand::Text(a), Operand::Text(b)) => Some(a.cmp(&b)),
        (Operand::Number(a), Operand::Number(b)) => a.partial_cmp(&b),
        (Operand::Text(a), Operand::Number(b)) => parse_finite(&a)?.partial_cmp(&b),
        (Operand::Number(a), Operand::Text(b)) => a.partial_cmp(&parse_finite(&b)?),
    }
}

/// Passes unless `value` is known to order on the `rejected` side of `bound`.
fn within(value: &Value<'_>, bound: &Value<'_>, rejected: Ordering) -> bool {
    operands(value, bound).is_some_and(|(left, right)| order(left, right) != Some(rejected))
}

// ============================================================================
// MIN
// ============================================================================

/// Validates that a value is at least a minimum.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Min;
/// use formcheck::foundation::Validate;
///
/// let from_eight = Min::new("8");
/// assert!(from_eight.check("20"));
/// assert!(from_eight.check(8));
/// assert!(!from_eight.check("7"));
///
/// let after_launch = Min::new("2015-11-26");
/// assert!(after_launch.check("2015-12-26"));
/// assert!(!after_launch.check("2015-11-25"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    bound: Value<'static>,
}

impl Min {
    /// Creates a validator accepting values not below `bound`.
    pub fn new<'a>(bound: impl Into<Value<'a>>) -> Self {
        Self {
            bound: bound.into().into_owned(),
        }
    }

    /// Returns the configured lower bound.
    #[must_use]
    pub fn bound(&self) -> &Value<'static> {
        &self.bound
    }
}

impl Validate for Min {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        within(value, &self.bound, Ordering::Less)
    }
}

/// Returns `true` if `value` is greater than or equal to `bound`.
///
/// Operands that are neither text nor numbers (`null`, booleans, composite
/// values) yield `false`. Text and numbers that have no order, such as
/// non-numeric text against a number or `NaN`, never fall below the bound
/// and yield `true`.
///
/// # Examples
///
/// ```
/// use formcheck::min;
///
/// assert!(min("20", "8"));
/// assert!(min("b", "a"));
/// assert!(!min("B", "b"));
/// assert!(!min(-3, -2));
/// ```
#[must_use]
pub fn min<'a, 'b>(value: impl Into<Value<'a>>, bound: impl Into<Value<'b>>) -> bool {
    within(&value.into(), &bound.into(), Ordering::Less)
}

// ============================================================================
// MAX
// ============================================================================

/// Validates that a value does not exceed a maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    bound: Value<'static>,
}

impl Max {
    /// Creates a validator accepting values not above `bound`.
    pub fn new<'a>(bound: impl Into<Value<'a>>) -> Self {
        Self {
            bound: bound.into().into_owned(),
        }
    }

    /// Returns the configured upper bound.
    #[must_use]
    pub fn bound(&self) -> &Value<'static> {
        &self.bound
    }
}

impl Validate for Max {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        within(value, &self.bound, Ordering::Greater)
    }
}

/// Returns `true` if `value` is lower than or equal to `bound`.
///
/// Uses the same comparison rules as [`min`].
#[must_use]
pub fn max<'a, 'b>(value: impl Into<Value<'a>>, bound: impl Into<Value<'b>>) -> bool {
    within(&value.into(), &bound.into(), Ordering::Greater)
}

// ============================================================================
// MATCH
// ============================================================================

/// Validates that a value renders to the same string as an expected value.
///
/// Useful for confirmation fields.
///
/// # Examples
///
/// ```
/// use formcheck::validators::MatchValue;
/// use formcheck::foundation::Validate;
///
/// let confirm = MatchValue::new("hunter2");
/// assert!(confirm.check("hunter2"));
/// assert!(!confirm.check("hunter3"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatchValue {
    expected: Value<'static>,
}

impl MatchValue {
    /// Creates a validator accepting values equal to `expected`.
    pub fn new<'a>(expected: impl Into<Value<'a>>) -> Self {
        Self {
            expected: expected.into().into_owned(),
        }
    }
}

impl Validate for MatchValue {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        values_match(value, &self.expected)
    }
}

fn values_match(a: &Value<'_>, b: &Value<'_>) -> bool {
    match (a.normalize(), b.normalize()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Returns `true` if both values render to the same string.
///
/// `null` and `undefined` render to their names, so they match themselves
/// but not each other; composite values match nothing.
///
/// # Examples
///
/// ```
/// use formcheck::{Value, match_values};
///
/// assert!(match_values("0", 0));
/// assert!(match_values("false", false));
/// assert!(!match_values(1, 2));
/// assert!(!match_values(Value::Null, Value::Undefined));
/// ```
#[must_use]
pub fn match_values<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> bool {
    values_match(&a.into(), &b.into())
}
