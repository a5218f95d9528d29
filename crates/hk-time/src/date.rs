//! `Date` type.
//!
//! A date is a day count with serial 1 on 1900-01-01.  The representable
//! span, 1900-01-01 through 2199-12-31, comfortably contains every solar
//! date the lunar data can produce.
//!
//! At the string boundary dates are exchanged in ISO 8601 calendar format
//! (`YYYY-MM-DD`); see the [`FromStr`](std::str::FromStr) and
//! [`Display`](std::fmt::Display) implementations.

use crate::weekday::Weekday;
use hk_core::errors::{Error, Result};
use hk_core::utilities::data_parsers::parse_iso_date;
use hk_core::ensure;

/// Days from 1970-01-01 back to the day before serial 1.
const UNIX_EPOCH_SERIAL: i32 = 25_568;

/// A Gregorian calendar date without a time component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// 1900-01-01.
    pub const MIN: Date = Date(1);

    /// 2199-12-31.
    pub const MAX: Date = Date(109_573);

    /// Date with the given serial number.
    ///
    /// # Errors
    /// [`Error::Date`] outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Date,
            "serial {serial} outside [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(Date(serial))
    }

    /// Date from its Gregorian components.
    ///
    /// # Errors
    /// * [`Error::Date`] if `year` is outside 1900–2199.
    /// * [`Error::InvalidCalendarDate`] if the month or day does not exist
    ///   in that year (e.g. February 29 in a common year).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!((1900..=2199).contains(&year), Date, "year {year} outside [1900, 2199]");
        ensure!(
            (1..=12).contains(&month),
            InvalidCalendarDate,
            "{year:04}-{month:02}: no such month"
        );
        let last = days_in_month(year, month);
        ensure!(
            (1..=last).contains(&day),
            InvalidCalendarDate,
            "{year:04}-{month:02}-{day:02}: month has {last} days"
        );
        Ok(Date(days_from_civil(year, month, day) + UNIX_EPOCH_SERIAL))
    }

    /// The serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        civil_from_days(self.0 - UNIX_EPOCH_SERIAL)
    }

    /// Year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 was a Monday.
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// The date `n` days later (earlier if `n < 0`).
    ///
    /// # Errors
    /// [`Error::Date`] if the result leaves the representable span.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .filter(|s| (Self::MIN.0..=Self::MAX.0).contains(s))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} {n:+} days leaves [1900-01-01, 2199-12-31]")))
    }
}

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

/// Signed number of days from `rhs` to `self`.
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` string.  Any failure, including a
    /// well-formed string naming a non-existent day, is reported as
    /// [`Error::InvalidDateFormat`].
    fn from_str(s: &str) -> Result<Self> {
        parse_iso_date(s)
            .and_then(|(y, m, d)| Date::from_ymd(y, m, d).ok())
            .ok_or_else(|| Error::InvalidDateFormat(s.to_string()))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of `month` (1–12) in `year`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Civil-calendar conversions on a March-based year, counted from
// 1970-01-01 (0000-03-01 is day -719_468).

fn days_from_civil(year: u16, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_endpoints() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
        assert_eq!(Date::MIN.ymd(), (1900, 1, 1));
        assert_eq!(Date::MAX.ymd(), (2199, 12, 31));
    }

    #[test]
    fn components_survive_conversion() {
        for (y, m, d) in [(1900, 2, 28), (1900, 3, 1), (2000, 2, 29), (2024, 2, 10), (2050, 12, 31)] {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d));
            assert_eq!(date.year(), y);
            assert_eq!(date.month(), m);
            assert_eq!(date.day_of_month(), d);
        }
        // 1900 is a common year.
        assert_eq!(
            Date::from_ymd(1900, 3, 1).unwrap() - Date::from_ymd(1900, 2, 28).unwrap(),
            1
        );
    }

    #[test]
    fn rejects_impossible_components() {
        assert!(matches!(Date::from_ymd(2023, 2, 29), Err(Error::InvalidCalendarDate(_))));
        assert!(matches!(Date::from_ymd(2024, 13, 1), Err(Error::InvalidCalendarDate(_))));
        assert!(matches!(Date::from_ymd(2024, 4, 0), Err(Error::InvalidCalendarDate(_))));
        assert!(matches!(Date::from_ymd(1899, 12, 31), Err(Error::Date(_))));
        assert!(matches!(Date::from_serial(0), Err(Error::Date(_))));
    }

    #[test]
    fn weekdays() {
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 2, 10).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(2024, 2, 11).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn day_arithmetic() {
        let d = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!((d + 1).ymd(), (2024, 2, 29));
        assert_eq!((d + 2).ymd(), (2024, 3, 1));
        assert_eq!((d - 59).ymd(), (2023, 12, 31));
        let mut e = d;
        e += 366;
        assert_eq!(e.ymd(), (2025, 2, 28));
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MAX.add_days(i32::MAX).is_err());
    }

    #[test]
    fn parse_and_display() {
        let d: Date = "2024-02-10".parse().unwrap();
        assert_eq!(d.ymd(), (2024, 2, 10));
        assert_eq!(d.to_string(), "2024-02-10");
        assert_eq!(format!("{d:?}"), "Date(2024-02-10)");
        for bad in ["2024-02-30", "2023-02-29", "2024-13-01", "20XX-01-01", "1899-12-31"] {
            assert_eq!(
                bad.parse::<Date>(),
                Err(Error::InvalidDateFormat(bad.to_string())),
                "{bad}"
            );
        }
    }
}
