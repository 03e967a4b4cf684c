//! Core trait for the validation system
//!
//! Every predicate in this crate is also available as a small validator type
//! implementing [`Validate`], so callers can store, configure and pass
//! predicates around instead of calling the free functions directly.

use crate::foundation::Value;

/// A stateless predicate over a single [`Value`].
///
/// # Examples
///
/// ```
/// use formcheck::foundation::{Validate, Value};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     fn is_valid(&self, value: &Value<'_>) -> bool {
///         value.as_text().is_some_and(|text| !text.trim().is_empty())
///     }
/// }
///
/// assert!(NonBlank.check("hello"));
/// assert!(!NonBlank.check("   "));
/// assert!(!NonBlank.check(None::<&str>));
/// ```
pub trait Validate {
    /// Returns `true` if `value` satisfies this predicate.
    fn is_valid(&self, value: &Value<'_>) -> bool;

    /// Converts `value` and tests it.
    ///
    /// Accepts anything convertible into a [`Value`] (`&str`, `String`,
    /// numbers, `bool`, `Option<T>`, ...).
    fn check<'a>(&self, value: impl Into<Value<'a>>) -> bool
    where
        Self: Sized,
    {
        self.is_valid(&value.into())
    }

    /// Returns the name of this validator.
    ///
    /// Used for debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        (**self).is_valid(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        (**self).is_valid(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
