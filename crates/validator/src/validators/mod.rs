//! Built-in validators
//!
//! Every predicate comes in two shapes: a free function taking anything
//! convertible into a [`Value`](crate::foundation::Value), and a validator
//! type implementing [`Validate`](crate::foundation::Validate) that can be
//! configured, stored and passed around.
//!
//! # Categories
//!
//! - **Format**: alphanumeric, color, email, URL, phone, date, time, timezone
//! - **Calendar**: real dates, ages
//! - **Checksum**: credit card numbers (Luhn)
//! - **Comparison**: min/max, min/max length, number, pattern, match, required
//! - **Policy**: password strength
//!
//! # Examples
//!
//! ```
//! use formcheck::foundation::Validate;
//! use formcheck::validators::{CreditCard, MinLength, Tel, email};
//!
//! assert!(email("user@world.net"));
//! assert!(MinLength::new(3).check("abc"));
//! assert!(Tel::new().max_length(16).check("0345 740 4404"));
//! assert!(CreditCard::new().check("4000 0566 5566 5556"));
//! ```

// Format validators
pub mod content;
pub mod pattern;
pub mod phone;
pub mod time;

// Calendar validators
pub mod calendar;

// Checksum validators
pub mod credit_card;

// Comparison validators
pub mod length;
pub mod nullable;
pub mod number;
pub mod range;

// Policy validators
pub mod password;

// ============================================================================
// RE-EXPORTS: Format validators
// ============================================================================

pub use content::{Email, Url, email, url};
pub use pattern::{AlphaNumeric, Color, Pattern, alpha_numeric, color, pattern};
pub use phone::{Tel, tel};
pub use time::{Date, Time, Timezone, date, time, timezone};

// ============================================================================
// RE-EXPORTS: Calendar and checksum validators
// ============================================================================

pub use calendar::{Age, DateExists, age, date_exists};
pub use credit_card::{CreditCard, credit_card};

// ============================================================================
// RE-EXPORTS: Comparison validators
// ============================================================================

pub use length::{MaxLength, MinLength, max_length, min_length};
pub use nullable::{Required, required};
pub use number::{Number, number};
pub use range::{MatchValue, Max, Min, match_values, max, min};

// ============================================================================
// RE-EXPORTS: Policy validators
// ============================================================================

pub use password::{Password, password};
