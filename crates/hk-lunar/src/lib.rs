//! # hk-lunar
//!
//! Conversion between the Korean lunar calendar and the Gregorian calendar.
//!
//! The [`LunisolarConverter`] trait is the contract the holiday resolver
//! consumes; [`KoreanLunarCalendar`] is the table-driven implementation
//! covering lunar years 1900–2050.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The conversion contract.
pub mod converter;

/// Korean lunar calendar implementation.
pub mod korean;

/// `LunarDate` value type.
pub mod lunar_date;

mod data;

pub use converter::LunisolarConverter;
pub use korean::KoreanLunarCalendar;
pub use lunar_date::LunarDate;
