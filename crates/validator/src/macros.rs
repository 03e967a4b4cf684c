//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a unit validator (struct + `Validate` impl + free predicate fn)
//!
//! # Examples
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use regex::Regex;
//!
//! static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9a-f]+$").unwrap());
//!
//! // Rule written out
//! formcheck::validator! {
//!     /// Accepts text made of at least three characters.
//!     pub AtLeastThree;
//!     rule(input) { input.as_text().is_some_and(|text| text.chars().count() >= 3) }
//!     fn at_least_three;
//! }
//!
//! // Rule backed by a regex static
//! formcheck::validator! {
//!     /// Accepts lowercase hexadecimal text.
//!     pub LowerHex matches HEX;
//!     fn lower_hex;
//! }
//!
//! assert!(at_least_three("abc"));
//! assert!(!at_least_three("ab"));
//! assert!(lower_hex("c0ffee"));
//! assert!(!lower_hex("C0FFEE"));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation and
/// a free predicate function taking anything convertible into a `Value`.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied.
///
/// # Variants
///
/// **Explicit rule**:
/// ```rust,ignore
/// validator! {
///     pub Required;
///     rule(input) { !input.is_absent() }
///     fn required;
/// }
/// ```
///
/// **Regex rule** (full-text match against a `LazyLock<Regex>` static; only
/// text and numbers are tested, every other value is rejected):
/// ```rust,ignore
/// validator! {
///     pub Time matches TIME_REGEX;
///     fn time;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1: Explicit rule + free fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        fn $func:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            fn is_valid(&self, $inp: &$crate::foundation::Value<'_>) -> bool $rule
        }

        #[doc = concat!("Returns `true` if `value` passes [`", stringify!($name), "`].")]
        #[must_use]
        $vis fn $func<'a>(value: impl Into<$crate::foundation::Value<'a>>) -> bool {
            $crate::foundation::Validate::is_valid(&$name, &value.into())
        }
    };

    // ── Variant 2: Regex rule + free fn ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident matches $regex:ident;
        fn $func:ident;
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule(input) { input.as_text().is_some_and(|text| $regex.is_match(&text)) }
            fn $func;
        }
    };
}
