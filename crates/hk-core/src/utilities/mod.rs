//! Miscellaneous utilities.

/// Strict parsers for ISO dates, years and `MM-DD` month-days.
pub mod data_parsers;
