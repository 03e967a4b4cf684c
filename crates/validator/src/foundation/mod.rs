//! Core validation types and traits
//!
//! This module contains the building blocks every predicate shares:
//!
//! - **Value model**: [`Value`], the closed union of inputs a predicate accepts
//! - **Normalizer**: [`normalize`] and [`clean_value`]
//! - **Trait**: [`Validate`]
//! - **Errors**: [`Error`] for fallible validator construction
//!
//! # Examples
//!
//! ```
//! use formcheck::foundation::{Validate, Value};
//! use formcheck::validators::Color;
//!
//! assert!(Color.is_valid(&Value::from("#fff")));
//! assert!(!Color.check("fff"));
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use traits::Validate;
pub use value::{Value, clean_value, format_number, normalize};

/// Common imports for implementing custom validators.
pub mod prelude {
    pub use super::{Error, Validate, Value, clean_value, normalize};
}
