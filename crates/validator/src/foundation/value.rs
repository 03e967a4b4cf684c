//! The input value model and its normalization rules.
//!
//! Form and ingestion layers hand predicates loosely typed data. [`Value`]
//! closes that data over the handful of shapes a predicate can reason about,
//! and [`normalize`] gives each shape its canonical string form.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace run pattern is valid"));

// ============================================================================
// VALUE
// ============================================================================

/// A raw value handed to a predicate.
///
/// Anything the host cannot express as one of the primitive variants (objects,
/// arrays, callables) arrives as [`Value::Opaque`], which every predicate
/// rejects.
///
/// # Examples
///
/// ```
/// use formcheck::Value;
///
/// assert_eq!(Value::from("abc"), Value::Text("abc".into()));
/// assert_eq!(Value::from(3), Value::Number(3.0));
/// assert_eq!(Value::from(None::<&str>), Value::Null);
/// assert_eq!(Value::default(), Value::Undefined);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<'a> {
    /// No value was supplied at all.
    #[default]
    Undefined,
    /// A value was supplied and is explicitly empty.
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
    /// A composite or foreign value with no string representation.
    Opaque,
}

impl Value<'_> {
    /// Returns the canonical string form, or `None` for [`Value::Opaque`].
    #[must_use]
    pub fn normalize(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Undefined => Some(Cow::Borrowed("undefined")),
            Value::Null => Some(Cow::Borrowed("null")),
            Value::Bool(true) => Some(Cow::Borrowed("true")),
            Value::Bool(false) => Some(Cow::Borrowed("false")),
            Value::Number(n) => Some(Cow::Owned(format_number(*n))),
            Value::Text(text) => Some(Cow::Borrowed(text.as_ref())),
            Value::Opaque => None,
        }
    }

    /// Returns the text format validators test against.
    ///
    /// Only text and numbers carry a meaningful textual form; the literal
    /// names of `null`, `undefined` and booleans never count as input.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(_) | Value::Number(_) => self.normalize(),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`] and [`Value::Undefined`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Borrows this value with a shorter lifetime.
    #[must_use]
    pub fn reborrow(&self) -> Value<'_> {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(*n),
            Value::Text(text) => Value::Text(Cow::Borrowed(text.as_ref())),
            Value::Opaque => Value::Opaque,
        }
    }

    /// Detaches the value from any borrowed input.
    #[must_use]
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(b),
            Value::Number(n) => Value::Number(n),
            Value::Text(text) => Value::Text(Cow::Owned(text.into_owned())),
            Value::Opaque => Value::Opaque,
        }
    }
}

/// Renders a number in plain decimal notation.
///
/// `-0` renders as `"0"`, non-finite values as `NaN`, `Infinity` and
/// `-Infinity`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let rendered = if n > 0.0 { "Infinity" } else { "-Infinity" };
        rendered.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

/// Returns the canonical string form of a value.
///
/// Never fails: a value without a string representation yields `None` and
/// callers fall back to the raw [`Value`].
///
/// # Examples
///
/// ```
/// use formcheck::{Value, normalize};
///
/// assert_eq!(normalize(&Value::from(1.5)).as_deref(), Some("1.5"));
/// assert_eq!(normalize(&Value::Null).as_deref(), Some("null"));
/// assert_eq!(normalize(&Value::Opaque), None);
/// ```
#[must_use]
pub fn normalize<'v>(value: &'v Value<'_>) -> Option<Cow<'v, str>> {
    value.normalize()
}

/// Trims a value and collapses inner whitespace runs into a single space.
///
/// Absent input cleans to an empty string.
///
/// # Examples
///
/// ```
/// use formcheck::{Value, clean_value};
///
/// assert_eq!(clean_value("  a   b "), "a b");
/// assert_eq!(clean_value(Value::Undefined), "");
/// ```
#[must_use]
pub fn clean_value<'a>(value: impl Into<Value<'a>>) -> String {
    let value = value.into();
    if matches!(value, Value::Undefined) {
        return String::new();
    }
    match value.normalize() {
        Some(text) => clean_text(&text),
        None => String::new(),
    }
}

pub(crate) fn clean_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<'a> From<&'a Value<'_>> for Value<'a> {
    fn from(value: &'a Value<'_>) -> Self {
        value.reborrow()
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Opaque, Value::Number),
            serde_json::Value::String(s) => Value::Text(Cow::Borrowed(s.as_str())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Opaque,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
