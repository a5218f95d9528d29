//! The lunar → solar conversion contract consumed by the holiday resolver.

use crate::lunar_date::LunarDate;
use hk_core::errors::Result;
use hk_time::Date;
use std::ops::RangeInclusive;

/// Converts lunar calendar dates to Gregorian dates.
///
/// Implementations are pure: the same input always yields the same date.
pub trait LunisolarConverter: std::fmt::Debug + Send + Sync {
    /// Lunar years this converter has data for.
    fn supported_years(&self) -> RangeInclusive<u16>;

    /// Convert a lunar date (regular or leap month) to its solar date.
    ///
    /// # Errors
    /// [`Error::InvalidLunarDate`](hk_core::Error::InvalidLunarDate) if the
    /// date does not exist in that lunar year.
    fn to_solar(&self, date: LunarDate) -> Result<Date>;

    /// Convert the regular-month lunar date `(year, month, day)` and shift
    /// the resulting solar date by `day_offset` calendar days.
    ///
    /// The offset never changes which lunar day is interpreted, only the
    /// returned solar date.
    fn convert(&self, year: u16, month: u8, day: u8, day_offset: i32) -> Result<Date> {
        self.to_solar(LunarDate::new(year, month, day))?
            .add_days(day_offset)
    }
}
