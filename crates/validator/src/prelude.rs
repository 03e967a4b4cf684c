//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck::prelude::*;` import that brings in the
//! trait, the value model and every built-in predicate and validator type.
//!
//! # Examples
//!
//! ```
//! use formcheck::prelude::*;
//!
//! assert!(color("#fff"));
//! assert!(Tel::new().check("+1 646 847 9415"));
//! assert_eq!(clean_value("  a   b "), "a b");
//! ```

// ============================================================================
// FOUNDATION: Trait, value model, errors
// ============================================================================

pub use crate::foundation::{Error, Validate, Value, clean_value, normalize};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::*;
