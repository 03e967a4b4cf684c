//! Password strength validator.
//!
//! Validates passwords against configurable complexity requirements.

use crate::foundation::{Validate, Value};

// ============================================================================
// PASSWORD STRENGTH VALIDATOR
// ============================================================================

/// Validates password strength against configurable requirements.
///
/// Passwords may only contain printable ASCII without spaces (`!` through
/// `~`). The default policy asks for 8 to 64 characters with at least one
/// uppercase letter, one lowercase letter and one digit.
///
/// # Examples
///
/// ```
/// use formcheck::validators::Password;
/// use formcheck::foundation::Validate;
///
/// let default = Password::new();
/// assert!(default.check("Aadsfsf1435"));
/// assert!(!default.check("Aadsfs f1435"));
/// assert!(!default.check("aadsfsf1435"));
///
/// let strong = Password::new().min_length(12).require_special(true);
/// assert!(strong.check("MyP@ssw0rd123!"));
/// assert!(!strong.check("MyPassw0rd123"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password {
    min_length: usize,
    max_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digit: bool,
    require_special: bool,
}

impl Password {
    /// Shortest password accepted by default.
    pub const DEFAULT_MIN_LENGTH: usize = 8;
    /// Longest password accepted by default.
    pub const DEFAULT_MAX_LENGTH: usize = 64;

    /// Creates a password validator with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
        }
    }

    /// Sets the minimum password length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Sets the maximum password length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    /// Requires at least one uppercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    /// Requires at least one lowercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    /// Requires at least one digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_digit(mut self, required: bool) -> Self {
        self.require_digit = required;
        self
    }

    /// Requires at least one ASCII punctuation character.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_special(mut self, required: bool) -> Self {
        self.require_special = required;
        self
    }

    fn validate_text(&self, input: &str) -> bool {
        if !input.chars().all(|c| c.is_ascii_graphic()) {
            return false;
        }

        // ASCII only from here, so bytes and chars agree
        let length = input.len();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        let bytes = input.as_bytes();
        let has = |predicate: fn(&u8) -> bool| bytes.iter().any(predicate);

        (!self.require_uppercase || has(u8::is_ascii_uppercase))
            && (!self.require_lowercase || has(u8::is_ascii_lowercase))
            && (!self.require_digit || has(u8::is_ascii_digit))
            && (!self.require_special || has(u8::is_ascii_punctuation))
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Password {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        match value {
            Value::Text(text) => self.validate_text(text),
            _ => false,
        }
    }
}

/// Returns `true` if `value` satisfies the default [`Password`] policy.
#[must_use]
pub fn password<'a>(value: impl Into<Value<'a>>) -> bool {
    Password::new().check(value)
}
