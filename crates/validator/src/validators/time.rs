//! RFC 3339 date and time fragment validators.
//!
//! These check shape only; [`date_exists`](crate::date_exists) checks the
//! calendar.

use std::sync::LazyLock;

use regex::Regex;

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]{2})?$")
        .expect("time pattern is valid")
});

static TIMEZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Z|[+-](?:1[0-4]|0[0-9]):(00|30|45))$").expect("timezone pattern is valid")
});

pub(crate) static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$")
        .expect("date pattern is valid")
});

// ============================================================================
// TIME VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a `HH:MM:SS` time with optional two-digit fractional seconds.
    ///
    /// Hours: 00..=23, minutes and seconds: 00..=59.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::time;
    ///
    /// assert!(time("17:39:57"));
    /// assert!(time("23:20:50.52"));
    /// assert!(!time("24:39:57"));
    /// assert!(!time("23:20:50.100"));
    /// ```
    pub Time matches TIME_REGEX;
    fn time;
}

// ============================================================================
// TIMEZONE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a UTC offset: `Z`, or a sign, hours up to 14 and minutes of
    /// 00, 30 or 45.
    pub Timezone matches TIMEZONE_REGEX;
    fn timezone;
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a `YYYY-MM-DD` date shape.
    ///
    /// Months run 01..=12 and days 01..=31 regardless of month; use
    /// [`DateExists`](crate::validators::DateExists) to reject `2015-11-31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::date;
    ///
    /// assert!(date("2015-11-25"));
    /// assert!(date("0015-01-05"));
    /// assert!(!date("2015-1-25"));
    /// assert!(!date("2015/11/25"));
    /// ```
    pub Date matches DATE_REGEX;
    fn date;
}
