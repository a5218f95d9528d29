//! South Korea business-day calendar.

use hk_core::errors::Result;
use hk_resolver::{HolidayResolver, YearRange};
use hk_time::{Calendar, Date};
use std::collections::HashSet;

/// South Korea calendar.
///
/// Weekends and every resolved public holiday (solar, lunar, festival
/// windows and year exceptions) of a fixed span of years are non-business
/// days.  Outside that span only weekends are observed.
#[derive(Debug, Clone)]
pub struct SouthKorea {
    years: YearRange,
    holidays: HashSet<i32>,
}

impl SouthKorea {
    /// Resolve every year of `years` with `resolver`.
    ///
    /// # Errors
    /// Any error the resolver reports for a year of the span.
    pub fn new(resolver: &HolidayResolver, years: YearRange) -> Result<Self> {
        let mut holidays = HashSet::new();
        for year in years.min()..=years.max() {
            holidays.extend(
                resolver
                    .holiday_dates(i32::from(year))?
                    .into_iter()
                    .map(|d| d.serial()),
            );
        }
        tracing::debug!(%years, holidays = holidays.len(), "South Korea calendar built");
        Ok(Self { years, holidays })
    }

    /// The span of years whose holidays are known.
    pub fn years(&self) -> YearRange {
        self.years
    }

    /// Return `true` if `date` is a public holiday, whatever its weekday.
    pub fn is_public_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date.serial())
    }

    /// Number of distinct holiday dates in the span.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for SouthKorea {
    fn name(&self) -> &str {
        "South Korea"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_public_holiday(date)
    }
}
