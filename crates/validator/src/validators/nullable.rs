//! Presence validator
//!
//! # Examples
//!
//! ```
//! use formcheck::{Value, required};
//!
//! assert!(required("hello"));
//! assert!(required(0));
//! assert!(!required("   "));
//! assert!(!required(None::<&str>));
//! assert!(!required(Value::Undefined));
//! ```

use crate::foundation::Value;
use crate::foundation::value::clean_text;

crate::validator! {
    /// Validates that a value was provided and is not blank.
    ///
    /// Text counts once trimmed of whitespace; any number or boolean counts,
    /// including `0` and `false`.
    pub Required;
    rule(input) {
        match input {
            Value::Text(text) => !clean_text(text).is_empty(),
            Value::Number(_) | Value::Bool(_) => true,
            Value::Null | Value::Undefined | Value::Opaque => false,
        }
    }
    fn required;
}
