//! Holiday rule schema.
//!
//! Three rule categories feed the resolver: fixed solar dates, fixed lunar
//! dates, and holidays that exist in one specific year only.

use hk_core::errors::{Error, Result};
use hk_core::ensure;
use hk_core::utilities::data_parsers::parse_month_day;

/// Longest month length, indexed by month − 1 (February counted as 29).
const MAX_SOLAR_DAYS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A validated `(month, day)` pair, written `MM-DD` in rule documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// A solar month-day.  February 29 is accepted; whether it exists is
    /// decided per year at resolution time.
    pub fn solar(month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month),
            DataIntegrity,
            "solar month {month} out of range [1, 12]"
        );
        let max = MAX_SOLAR_DAYS[usize::from(month) - 1];
        ensure!(
            (1..=max).contains(&day),
            DataIntegrity,
            "solar day {month:02}-{day:02} out of range [1, {max}]"
        );
        Ok(Self { month, day })
    }

    /// A lunar month-day (month 1–12, day 1–30).
    pub fn lunar(month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month) && (1..=30).contains(&day),
            DataIntegrity,
            "lunar day {month:02}-{day:02} out of range"
        );
        Ok(Self { month, day })
    }

    /// Parse `MM-DD` as a solar month-day.
    pub fn parse_solar(s: &str) -> Result<Self> {
        let (m, d) = parse_month_day(s).ok_or_else(|| malformed(s))?;
        Self::solar(m, d)
    }

    /// Parse `MM-DD` as a lunar month-day.
    pub fn parse_lunar(s: &str) -> Result<Self> {
        let (m, d) = parse_month_day(s).ok_or_else(|| malformed(s))?;
        Self::lunar(m, d)
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

fn malformed(s: &str) -> Error {
    Error::DataIntegrity(format!("malformed month-day {s:?} (expected 'MM-DD')"))
}

/// A holiday on the same solar date every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarRule {
    /// Solar month and day.
    pub month_day: MonthDay,
    /// Holiday name.
    pub name: String,
}

/// A holiday on the same lunar date every year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarRule {
    /// Lunar month and day (regular month).
    pub month_day: MonthDay,
    /// Holiday name.
    pub name: String,
    /// Whether the day before and the day after are observed as well.
    pub major_festival: bool,
}

/// A holiday that exists in one year only (substitute holiday, election
/// day, temporary holiday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearException {
    /// The only year in which the holiday applies.
    pub year: u16,
    /// Solar month and day.
    pub month_day: MonthDay,
    /// Holiday name.
    pub name: String,
}

/// One holiday rule of any category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayRule {
    /// Fixed solar date.
    FixedSolar(SolarRule),
    /// Fixed lunar date.
    FixedLunar(LunarRule),
    /// Year-specific solar date.
    YearException(YearException),
}

impl HolidayRule {
    /// Fixed solar holiday on `month`/`day`.
    pub fn solar(month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        Ok(Self::FixedSolar(SolarRule {
            month_day: MonthDay::solar(month, day)?,
            name: name.into(),
        }))
    }

    /// Fixed lunar holiday on lunar `month`/`day`, observed on that day only.
    pub fn lunar(month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        Self::lunar_with_window(month, day, name, false)
    }

    /// Fixed lunar holiday observed together with its surrounding days.
    pub fn festival(month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        Self::lunar_with_window(month, day, name, true)
    }

    fn lunar_with_window(
        month: u8,
        day: u8,
        name: impl Into<String>,
        major_festival: bool,
    ) -> Result<Self> {
        Ok(Self::FixedLunar(LunarRule {
            month_day: MonthDay::lunar(month, day)?,
            name: name.into(),
            major_festival,
        }))
    }

    /// Holiday on `month`/`day` of `year` only.
    pub fn exception(year: u16, month: u8, day: u8, name: impl Into<String>) -> Result<Self> {
        Ok(Self::YearException(YearException {
            year,
            month_day: MonthDay::solar(month, day)?,
            name: name.into(),
        }))
    }

    /// The holiday name.
    pub fn name(&self) -> &str {
        match self {
            Self::FixedSolar(r) => &r.name,
            Self::FixedLunar(r) => &r.name,
            Self::YearException(r) => &r.name,
        }
    }
}
