//! # formcheck
//!
//! Stateless predicates for validating single form and ingestion values.
//!
//! Every predicate takes one loosely typed value (text, a number, a boolean,
//! `null`, missing, or something composite) and answers `true` or `false`.
//! Invalid input is never an error.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck::{Value, email, max, min_length, required};
//!
//! assert!(email("user@world.net"));
//! assert!(min_length("alice", 3));
//! assert!(max("8", "20"));
//! assert!(!required(Value::Null));
//! ```
//!
//! ## Inputs
//!
//! Predicates accept anything convertible into a [`Value`]: `&str`, `String`,
//! every primitive number, `bool`, `Option<T>` (`None` is `null`) and, with
//! the `serde` feature, `&serde_json::Value`. Values are normalized to a
//! canonical string with [`normalize`] before text-based checks.
//!
//! ## Validator Types
//!
//! Each predicate also exists as a type implementing
//! [`Validate`](foundation::Validate), for configurable or stored use:
//!
//! ```
//! use formcheck::foundation::Validate;
//! use formcheck::validators::{Password, Tel};
//!
//! let tel = Tel::new().max_length(24);
//! let password = Password::new().min_length(12).require_special(true);
//!
//! assert!(tel.check("+44 (0)20 7684 8444"));
//! assert!(password.check("MyP@ssw0rd123!"));
//! ```
//!
//! Use the [`validator!`] macro to define new unit predicates in the same
//! shape.
//!
//! ## Cargo Features
//!
//! - `serde` (default): conversions from `serde_json::Value`.

pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{Error, Result, Value, clean_value, normalize};
pub use validators::{
    age, alpha_numeric, color, credit_card, date, date_exists, email, match_values, max,
    max_length, min, min_length, number, password, pattern, required, tel, time, timezone, url,
};
