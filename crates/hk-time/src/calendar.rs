//! `Calendar` trait.
//!
//! A calendar decides which dates are business days.  Rolling, stepping and
//! counting are provided on top of that single predicate, so an
//! implementation only has to know its own closures.
//!
//! Rolling never leaves the [`Date`] span: a search that runs into
//! [`Date::MIN`] or [`Date::MAX`] stops there and returns that bound, even
//! if the bound itself is closed.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"South Korea"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend or a holiday.
    fn is_non_business_day(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Roll `date` onto a business day according to `convention`.
    ///
    /// The modified conventions fall back to the opposite direction when the
    /// first choice leaves the month of `date`.  See the module docs for the
    /// behaviour at the ends of the date span.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        let forward = || roll(self, date, 1);
        let backward = || roll(self, date, -1);
        let same_month = |d: Date| d.month() == date.month();
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => forward(),
            BusinessDayConvention::Preceding => backward(),
            BusinessDayConvention::ModifiedFollowing => {
                Some(forward()).filter(|&d| same_month(d)).unwrap_or_else(backward)
            }
            BusinessDayConvention::ModifiedPreceding => {
                Some(backward()).filter(|&d| same_month(d)).unwrap_or_else(forward)
            }
            BusinessDayConvention::Nearest => {
                let (next, prev) = (forward(), backward());
                if next - date <= date - prev {
                    next
                } else {
                    prev
                }
            }
        }
    }

    /// Move `n` business days away from `date` (backwards if `n < 0`).
    /// `date` itself need not be a business day.  Stops at
    /// [`Date::MIN`] or [`Date::MAX`] when fewer than `n` business days are
    /// left in that direction.
    fn advance_business_days(&self, date: Date, n: i32) -> Date {
        let step = n.signum();
        (0..n.unsigned_abs()).fold(date, |d, _| match d.add_days(step) {
            Ok(next) => roll(self, next, step),
            Err(_) => d,
        })
    }

    /// Count the business days in `(from, to]`; negative if `to < from`.
    fn business_days_between(&self, from: Date, to: Date) -> i32 {
        let (start, end, sign) = if to >= from { (from, to, 1) } else { (to, from, -1) };
        let count = (1..=end - start)
            .filter(|&offset| self.is_business_day(start + offset))
            .count();
        sign * count as i32
    }

    /// Every non-business day in `[from, to]`, weekends included.
    fn non_business_days(&self, from: Date, to: Date) -> Vec<Date> {
        (0..=to - from)
            .map(|offset| from + offset)
            .filter(|&d| self.is_non_business_day(d))
            .collect()
    }
}

/// First business day reached from `date` (inclusive) stepping by `step`,
/// or the span bound in that direction if none is left.
fn roll<C: Calendar + ?Sized>(calendar: &C, mut date: Date, step: i32) -> Date {
    while calendar.is_non_business_day(date) {
        match date.add_days(step) {
            Ok(next) => date = next,
            Err(_) => break,
        }
    }
    date
}

/// A calendar whose only non-business days are Saturdays and Sundays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
