//! # hk-time
//!
//! Date, weekday, and business-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use weekday::Weekday;
