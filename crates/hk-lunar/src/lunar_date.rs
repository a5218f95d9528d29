//! `LunarDate`: a date in the Korean lunar calendar.

/// A lunar calendar date.
///
/// The value is not validated on construction; whether a month has 29 or
/// 30 days (and whether a leap month exists) depends on the year, so
/// validation happens in the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    /// Lunar year.
    pub year: u16,
    /// Lunar month (1–12).
    pub month: u8,
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// `true` for the intercalary (윤달) month carrying the same number.
    pub leap: bool,
}

impl LunarDate {
    /// A date in a regular (non-leap) month.
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            leap: false,
        }
    }

    /// A date in the leap month following regular month `month`.
    pub const fn leap(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            leap: true,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap {
            f.write_str(" (leap)")?;
        }
        Ok(())
    }
}
