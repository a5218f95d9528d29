//! Error types for holidayskr.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  All variants are
//! terminal for the call that produced them: nothing in the resolution path
//! retries.  The [`ensure!`](crate::ensure) and [`fail!`](crate::fail)
//! macros build an error of a named kind from a format string.

use thiserror::Error;

/// The top-level error type used throughout holidayskr.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date string is malformed or names a day that does not exist
    /// (e.g. `2024-02-30`).
    #[error("invalid date format: {0} (expected 'YYYY-MM-DD')")]
    InvalidDateFormat(String),

    /// A year string is malformed or the year lies outside the supported
    /// range.
    #[error("invalid year format: {0} (expected 'YYYY')")]
    InvalidYearFormat(String),

    /// A lunar (year, month, day) does not exist in the lunar calendar.
    #[error("invalid lunar date: {0}")]
    InvalidLunarDate(String),

    /// A fixed solar rule or year exception resolves to a non-existent
    /// Gregorian date (e.g. a Feb 29 rule in a common year).
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// The rule data violates an integrity constraint (duplicate keys,
    /// malformed entries).
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// Rule data could not be retrieved after the retry budget was spent.
    #[error("rule source error: {0}")]
    RuleSource(String),

    /// A configuration value is out of range or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout holidayskr.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::$kind(...))` from the enclosing function if `$cond`
/// is false.
///
/// # Example
/// ```
/// use hk_core::{ensure, errors::Error};
/// fn month(m: u8) -> hk_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), InvalidDateFormat, "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidDateFormat("month 13 out of range".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$kind(...))` immediately.
///
/// # Example
/// ```
/// use hk_core::{fail, errors::Error};
/// fn always_err() -> hk_core::errors::Result<()> {
///     fail!(DataIntegrity, "duplicate rule {}", "01-01");
/// }
/// assert!(matches!(always_err(), Err(Error::DataIntegrity(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
