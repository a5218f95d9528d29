//! `KoreanHolidays`: the string-boundary query API.

use crate::config::QueryConfig;
use crate::south_korea::SouthKorea;
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use hk_core::errors::{Error, Result};
use hk_core::utilities::data_parsers::parse_year;
use hk_resolver::{HolidayResolver, ResolvedHoliday, YearRange};
use hk_rules::RuleStore;
use hk_time::Date;
use std::sync::Arc;

/// Korea Standard Time, UTC+09:00.
pub const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Answers holiday questions for ISO date and year strings.
///
/// ```
/// use hk_query::KoreanHolidays;
///
/// let holidays = KoreanHolidays::builtin();
/// assert!(holidays.is_holiday("2024-02-12").unwrap());
/// assert!(!holidays.is_holiday("2024-04-22").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct KoreanHolidays {
    resolver: HolidayResolver,
    offset: FixedOffset,
}

impl KoreanHolidays {
    /// Queries over `resolver`, with "today" taken in KST.
    pub fn new(resolver: HolidayResolver) -> Self {
        Self {
            resolver,
            offset: kst(),
        }
    }

    /// Queries over the built-in rule set, memoized per year.
    pub fn builtin() -> Self {
        Self::new(HolidayResolver::korean(Arc::new(RuleStore::builtin())).with_cache())
    }

    /// Queries over `store` with the years and offset of `config`.
    ///
    /// # Errors
    /// [`Error::Config`] if `config` is invalid.
    pub fn from_config(store: Arc<RuleStore>, config: &QueryConfig) -> Result<Self> {
        let resolver = HolidayResolver::korean(store);
        let range = config.year_range(resolver.converter(), resolver.store())?;
        let offset = FixedOffset::east_opt(config.utc_offset_seconds()?)
            .ok_or_else(|| Error::Config(format!("invalid UTC offset {}h", config.utc_offset_hours)))?;
        Ok(Self {
            resolver: resolver.with_range(range)?.with_cache(),
            offset,
        })
    }

    /// Use `offset` instead of KST to decide what "today" is.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &HolidayResolver {
        &self.resolver
    }

    /// The offset used for "today".
    pub fn utc_offset(&self) -> FixedOffset {
        self.offset
    }

    /// Return `true` if the `YYYY-MM-DD` date is a public holiday.
    ///
    /// # Errors
    /// - [`Error::InvalidDateFormat`] if `date` is malformed or does not
    ///   exist.
    /// - [`Error::InvalidYearFormat`] if its year is not supported.
    pub fn is_holiday(&self, date: &str) -> Result<bool> {
        self.is_holiday_on(date.parse()?)
    }

    /// All holidays of the `YYYY` year, sorted by date.
    ///
    /// # Errors
    /// [`Error::InvalidYearFormat`] if `year` is not an integer or is not
    /// supported.
    pub fn holidays_of_year(&self, year: &str) -> Result<Vec<ResolvedHoliday>> {
        let parsed = parse_year(year).ok_or_else(|| Error::InvalidYearFormat(year.to_string()))?;
        self.resolver.resolve(parsed)
    }

    /// Return `true` if today, in the configured offset, is a holiday.
    pub fn is_today_holiday(&self) -> Result<bool> {
        self.is_holiday_at(Utc::now())
    }

    /// Return `true` if the local date of `instant` is a holiday.
    pub fn is_holiday_at(&self, instant: DateTime<Utc>) -> Result<bool> {
        self.is_holiday_on(self.local_date(instant)?)
    }

    /// Today's date in the configured offset.
    pub fn today(&self) -> Result<Date> {
        self.local_date(Utc::now())
    }

    /// Return `true` if `date` is a public holiday.
    pub fn is_holiday_on(&self, date: Date) -> Result<bool> {
        self.resolver.is_holiday(date)
    }

    /// Names of every holiday on `date`, in resolution order.
    pub fn holiday_names_on(&self, date: Date) -> Result<Vec<String>> {
        Ok(self
            .resolver
            .holidays_on(date)?
            .into_iter()
            .map(|h| h.name)
            .collect())
    }

    /// Holidays in `[from, to]`, sorted by date; empty if `from > to`.
    pub fn holidays_between(&self, from: Date, to: Date) -> Result<Vec<ResolvedHoliday>> {
        let mut holidays = Vec::new();
        if from > to {
            return Ok(holidays);
        }
        for year in from.year()..=to.year() {
            holidays.extend(
                self.resolver
                    .resolve(i32::from(year))?
                    .into_iter()
                    .filter(|h| (from..=to).contains(&h.date)),
            );
        }
        Ok(holidays)
    }

    /// A business-day calendar covering `first_year..=last_year`.
    pub fn business_calendar(&self, first_year: u16, last_year: u16) -> Result<SouthKorea> {
        SouthKorea::new(&self.resolver, YearRange::new(first_year, last_year)?)
    }

    fn local_date(&self, instant: DateTime<Utc>) -> Result<Date> {
        let local = instant.with_timezone(&self.offset).date_naive();
        let year = u16::try_from(local.year())
            .map_err(|_| Error::Date(format!("{local} is outside the supported dates")))?;
        Date::from_ymd(year, local.month() as u8, local.day() as u8)
    }
}

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).expect("UTC+9 is a valid offset")
}
