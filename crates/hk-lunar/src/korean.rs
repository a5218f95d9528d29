//! Table-driven Korean lunisolar calendar.

use crate::converter::LunisolarConverter;
use crate::data::{EPOCH_SOLAR, FIRST_YEAR, LAST_YEAR, YEAR_INFO};
use crate::lunar_date::LunarDate;
use hk_core::errors::{Error, Result};
use hk_core::{ensure, fail};
use hk_time::Date;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Serial of the first solar day of every lunar year in the table, plus one
/// trailing entry for the day after the last covered lunar year.
static YEAR_STARTS: LazyLock<Vec<i32>> = LazyLock::new(|| {
    let (y, m, d) = EPOCH_SOLAR;
    let mut serial = Date::from_ymd(y, m, d)
        .expect("lunar epoch is a valid solar date")
        .serial();
    let mut starts = Vec::with_capacity(YEAR_INFO.len() + 1);
    starts.push(serial);
    for &info in &YEAR_INFO {
        serial += months(info).map(|(_, _, len)| i32::from(len)).sum::<i32>();
        starts.push(serial);
    }
    starts
});

/// The Korean lunar calendar (음력), lunar years 1900–2050.
///
/// ```
/// use hk_lunar::{KoreanLunarCalendar, LunarDate, LunisolarConverter};
///
/// let cal = KoreanLunarCalendar;
/// let seollal = cal.to_solar(LunarDate::new(2024, 1, 1)).unwrap();
/// assert_eq!(seollal.to_string(), "2024-02-10");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanLunarCalendar;

impl KoreanLunarCalendar {
    /// The leap month of `year`, if it has one.
    pub fn leap_month(&self, year: u16) -> Result<Option<u8>> {
        let leap = (year_info(year)? & 0xf) as u8;
        Ok((leap != 0).then_some(leap))
    }

    /// Number of days (29 or 30) in the given lunar month.
    pub fn days_in_month(&self, year: u16, month: u8, leap: bool) -> Result<u8> {
        let info = year_info(year)?;
        months(info)
            .find(|&(m, l, _)| m == month && l == leap)
            .map(|(_, _, len)| len)
            .ok_or_else(|| {
                Error::InvalidLunarDate(format!(
                    "lunar year {year} has no {}month {month}",
                    if leap { "leap " } else { "" }
                ))
            })
    }

    /// Number of days in the lunar year (353–385).
    pub fn days_in_year(&self, year: u16) -> Result<u16> {
        Ok(months(year_info(year)?).map(|(_, _, len)| u16::from(len)).sum())
    }

    /// Convert a solar date to the lunar date falling on the same day.
    ///
    /// # Errors
    /// [`Error::Date`] if `date` lies outside the span covered by the table.
    pub fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        let serial = date.serial();
        let starts = &*YEAR_STARTS;
        let (first, end) = (starts[0], starts[starts.len() - 1]);
        ensure!(
            (first..end).contains(&serial),
            Date,
            "{date} is outside the lunar table (lunar {FIRST_YEAR}–{LAST_YEAR})"
        );
        let idx = starts.partition_point(|&s| s <= serial) - 1;
        let year = FIRST_YEAR + idx as u16;
        let mut remaining = serial - starts[idx];
        for (month, leap, len) in months(YEAR_INFO[idx]) {
            if remaining < i32::from(len) {
                return Ok(LunarDate {
                    year,
                    month,
                    day: remaining as u8 + 1,
                    leap,
                });
            }
            remaining -= i32::from(len);
        }
        unreachable!("YEAR_STARTS is the running sum of month lengths")
    }
}

impl LunisolarConverter for KoreanLunarCalendar {
    fn supported_years(&self) -> RangeInclusive<u16> {
        FIRST_YEAR..=LAST_YEAR
    }

    fn to_solar(&self, date: LunarDate) -> Result<Date> {
        let LunarDate {
            year,
            month,
            day,
            leap,
        } = date;
        ensure!(
            (1..=12).contains(&month),
            InvalidLunarDate,
            "{date}: month out of range [1, 12]"
        );
        ensure!(
            (1..=30).contains(&day),
            InvalidLunarDate,
            "{date}: day out of range [1, 30]"
        );
        let info = year_info(year)?;
        let mut offset = 0i32;
        for (m, l, len) in months(info) {
            if m == month && l == leap {
                ensure!(
                    day <= len,
                    InvalidLunarDate,
                    "{date}: month has only {len} days"
                );
                let start = YEAR_STARTS[usize::from(year - FIRST_YEAR)];
                return Date::from_serial(start + offset + i32::from(day) - 1);
            }
            offset += i32::from(len);
        }
        fail!(InvalidLunarDate, "{date}: lunar year {year} has no such leap month")
    }
}

fn year_info(year: u16) -> Result<u32> {
    ensure!(
        (FIRST_YEAR..=LAST_YEAR).contains(&year),
        InvalidLunarDate,
        "lunar year {year} out of supported range [{FIRST_YEAR}, {LAST_YEAR}]"
    );
    Ok(YEAR_INFO[usize::from(year - FIRST_YEAR)])
}

/// Months of a lunar year in calendar order as `(month, leap, length)`.
fn months(info: u32) -> impl Iterator<Item = (u8, bool, u8)> {
    let leap_month = (info & 0xf) as u8;
    let size = move |bit: u32| if info & bit != 0 { 30 } else { 29 };
    (1..=12u8).flat_map(move |m| {
        let regular = (m, false, size(0x10000 >> m));
        let leap = (m == leap_month).then(|| (m, true, size(0x10000)));
        std::iter::once(regular).chain(leap)
    })
}
