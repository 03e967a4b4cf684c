//! Calendar validators: real dates and ages.
//!
//! Both read a `YYYY-MM-DD` prefix, so full timestamps such as
//! `2015-11-30T10:00:00Z` are accepted and their time part ignored.

use chrono::{Datelike, NaiveDate, Utc};

use crate::foundation::{Validate, Value};
use crate::validators::time::DATE_REGEX;

/// Number of leading characters read as the calendar date.
const DATE_PREFIX_LEN: usize = 10;

/// Returns the number of days in `month` of `year` (Gregorian).
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Checks if a year is a leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Parses the date prefix of `text` into `(year, month, day)`, rejecting
/// days the month does not have.
fn parse_date_prefix(text: &str) -> Option<(i32, u32, u32)> {
    let prefix = leading_chars(text, DATE_PREFIX_LEN);
    if !DATE_REGEX.is_match(prefix) {
        return None;
    }

    let year = prefix[0..4].parse().ok()?;
    let month = prefix[5..7].parse().ok()?;
    let day = prefix[8..10].parse().ok()?;

    (day <= days_in_month(year, month)).then_some((year, month, day))
}

fn parse_naive_date(value: &Value<'_>) -> Option<NaiveDate> {
    let text = value.as_text()?;
    let (year, month, day) = parse_date_prefix(&text)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// ============================================================================
// DATE EXISTS VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the first ten characters name a real calendar day.
    ///
    /// Unlike [`Date`](crate::validators::Date), impossible days such as
    /// `2015-11-31` or `2015-02-29` are rejected; nothing rolls over.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck::date_exists;
    ///
    /// assert!(date_exists("2015-11-30"));
    /// assert!(date_exists("2016-02-29T08:00:00Z"));
    /// assert!(!date_exists("2015-11-31"));
    /// assert!(!date_exists("2015-02-29"));
    /// ```
    pub DateExists;
    rule(input) { input.as_text().is_some_and(|text| parse_date_prefix(&text).is_some()) }
    fn date_exists;
}

// ============================================================================
// AGE VALIDATOR
// ============================================================================

/// Computes full years elapsed since a date of birth and checks them against
/// inclusive bounds.
///
/// A birthday counts once today's `(month, day)` reaches the birth
/// `(month, day)`, so people born on 29 February turn a year older on
/// 1 March in non-leap years. Dates of birth after the reference date are
/// rejected.
///
/// The reference date is today's UTC date unless pinned with [`Age::as_of`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use formcheck::validators::Age;
/// use formcheck::foundation::Validate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let adult = Age::new().min_years(18).as_of(today);
///
/// assert_eq!(adult.years("2006-06-15"), Some(18));
/// assert_eq!(adult.years("2006-06-16"), None);
/// assert!(adult.check("1990-01-01T00:00:00Z"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Age {
    min_years: u32,
    max_years: Option<u32>,
    as_of: Option<NaiveDate>,
}

impl Age {
    /// Creates an age validator with no bounds, measured against today.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum age (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_years(mut self, min: u32) -> Self {
        self.min_years = min;
        self
    }

    /// Sets the maximum age (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_years(mut self, max: u32) -> Self {
        self.max_years = Some(max);
        self
    }

    /// Measures ages at `date` instead of today.
    #[must_use = "builder methods must be chained or built"]
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Returns the age in full years if it lies within the bounds.
    pub fn years<'a>(&self, dob: impl Into<Value<'a>>) -> Option<u32> {
        self.years_of(&dob.into())
    }

    fn years_of(&self, dob: &Value<'_>) -> Option<u32> {
        let dob = parse_naive_date(dob)?;
        let today = self.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let years = full_years_between(dob, today)?;

        let within_max = self.max_years.is_none_or(|max| years <= max);
        (years >= self.min_years && within_max).then_some(years)
    }
}

impl Validate for Age {
    fn is_valid(&self, value: &Value<'_>) -> bool {
        self.years_of(value).is_some()
    }
}

/// Full years from `dob` to `today`, or `None` when `dob` is in the future.
fn full_years_between(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    if dob > today {
        return None;
    }
    let birthday_reached = (today.month(), today.day()) >= (dob.month(), dob.day());
    let years = today.year() - dob.year() - i32::from(!birthday_reached);
    u32::try_from(years).ok()
}

/// Returns the age in full years of someone born on `dob`, if it lies within
/// `min_years..=max_years`.
///
/// `None` bounds are open. `None` is also returned when `dob` is not a real
/// date or lies in the future.
///
/// # Examples
///
/// ```
/// use formcheck::age;
///
/// assert_eq!(age("1900-01-01", Some(200), None), None);
/// assert_eq!(age("2999-01-01", None, None), None);
/// assert!(age("1990-05-20", Some(18), None).is_some());
/// ```
pub fn age<'a>(
    dob: impl Into<Value<'a>>,
    min_years: Option<u32>,
    max_years: Option<u32>,
) -> Option<u32> {
    bounded_age(min_years, max_years).years(dob)
}

fn bounded_age(min_years: Option<u32>, max_years: Option<u32>) -> Age {
    let validator = Age::new().min_years(min_years.unwrap_or_default());
    match max_years {
        Some(max) => validator.max_years(max),
        None => validator,
    }
}

// ============================================================================
// TESTS
// ============================================================================
