//! Error type for validator construction failures.
//!
//! Predicates never fail: an invalid input is a `false` result. The only
//! fallible operation is building a validator from caller-supplied
//! configuration, which is a programming error and surfaces as [`Error`].

/// Failure to construct a validator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied pattern fragment is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        let pattern = pattern.into();
        tracing::debug!(pattern = %pattern, error = %source, "rejected pattern fragment");
        Self::InvalidPattern { pattern, source }
    }
}

/// Result alias for fallible validator construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;
