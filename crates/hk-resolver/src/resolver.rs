//! `HolidayResolver`: merges the rule categories into one calendar per year.

use crate::cache::YearCache;
use crate::range::YearRange;
use crate::resolved::ResolvedHoliday;
use hk_core::errors::{Error, Result};
use hk_core::ensure;
use hk_lunar::{KoreanLunarCalendar, LunisolarConverter};
use hk_rules::{MonthDay, RuleStore};
use hk_time::Date;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Qualifier appended to a festival name for the preceding day.
pub const DAY_BEFORE: &str = "전날";
/// Qualifier appended to a festival name for the following day.
pub const DAY_AFTER: &str = "다음날";

/// Computes the public holidays of a year from a [`RuleStore`].
///
/// Resolution order within a year: fixed solar rules, then fixed lunar rules
/// (with the festival window where flagged), then the year's exceptions.
/// The result is stably sorted by date, so same-date entries keep that
/// order.
///
/// ```
/// use hk_resolver::HolidayResolver;
/// use hk_rules::RuleStore;
/// use std::sync::Arc;
///
/// let resolver = HolidayResolver::korean(Arc::new(RuleStore::builtin()));
/// let holidays = resolver.resolve(2024).unwrap();
/// assert_eq!(holidays[0].to_string(), "2024-01-01 신정");
/// ```
#[derive(Debug, Clone)]
pub struct HolidayResolver {
    store: Arc<RuleStore>,
    converter: Arc<dyn LunisolarConverter>,
    range: YearRange,
    cache: Option<Arc<YearCache>>,
}

impl HolidayResolver {
    /// Resolver over `store` using `converter`, answering for every year the
    /// converter supports.
    pub fn new(store: Arc<RuleStore>, converter: Arc<dyn LunisolarConverter>) -> Self {
        let range = YearRange::of_converter(converter.as_ref());
        Self {
            store,
            converter,
            range,
            cache: None,
        }
    }

    /// Resolver using the [`KoreanLunarCalendar`].
    pub fn korean(store: Arc<RuleStore>) -> Self {
        Self::new(store, Arc::new(KoreanLunarCalendar))
    }

    /// Restrict the supported years.
    ///
    /// # Errors
    /// [`Error::Config`] if `range` reaches beyond the converter's data.
    pub fn with_range(mut self, range: YearRange) -> Result<Self> {
        let available = YearRange::of_converter(self.converter.as_ref());
        ensure!(
            available.covers(&range),
            Config,
            "year range {range} exceeds the lunar data {available}"
        );
        self.range = range;
        Ok(self)
    }

    /// Memoize resolutions per year.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Arc::new(YearCache::new()));
        self
    }

    /// The rule store.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// The supported years.
    pub fn range(&self) -> YearRange {
        self.range
    }

    /// The lunisolar converter.
    pub fn converter(&self) -> &dyn LunisolarConverter {
        self.converter.as_ref()
    }

    /// All holidays of `year`, sorted by date.
    ///
    /// # Errors
    /// - [`Error::InvalidYearFormat`] if `year` is outside [`range`](Self::range).
    /// - [`Error::InvalidCalendarDate`] if a solar rule or exception names a
    ///   day that does not exist in `year`.
    /// - [`Error::InvalidLunarDate`] if a lunar rule names a day the lunar
    ///   year lacks.
    pub fn resolve(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        let year = self.range.check(year)?;
        match &self.cache {
            Some(cache) => Ok(cache
                .get_or_try_insert_with(year, || self.compute(year))?
                .to_vec()),
            None => self.compute(year),
        }
    }

    /// The distinct holiday dates of `year`.
    pub fn holiday_dates(&self, year: i32) -> Result<BTreeSet<Date>> {
        Ok(self.resolve(year)?.into_iter().map(|h| h.date).collect())
    }

    /// Holidays falling on `date`, in resolution order.
    pub fn holidays_on(&self, date: Date) -> Result<Vec<ResolvedHoliday>> {
        let mut holidays = self.resolve(i32::from(date.year()))?;
        holidays.retain(|h| h.date == date);
        Ok(holidays)
    }

    /// Return `true` if at least one holiday falls on `date`.
    pub fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self
            .resolve(i32::from(date.year()))?
            .iter()
            .any(|h| h.date == date))
    }

    fn compute(&self, year: u16) -> Result<Vec<ResolvedHoliday>> {
        let mut holidays = Vec::with_capacity(self.store.len() + 4);

        for rule in self.store.solar_rules() {
            holidays.push(ResolvedHoliday::new(
                solar_date(year, rule.month_day)?,
                &rule.name,
            ));
        }

        for rule in self.store.lunar_rules() {
            let (month, day) = (rule.month_day.month(), rule.month_day.day());
            let date = self.converter.convert(year, month, day, 0)?;
            holidays.push(ResolvedHoliday::new(date, &rule.name));
            if rule.major_festival {
                let before = self.converter.convert(year, month, day, -1)?;
                let after = self.converter.convert(year, month, day, 1)?;
                holidays.push(ResolvedHoliday::new(before, format!("{} {DAY_BEFORE}", rule.name)));
                holidays.push(ResolvedHoliday::new(after, format!("{} {DAY_AFTER}", rule.name)));
            }
        }

        for exception in self.store.exceptions(year) {
            holidays.push(ResolvedHoliday::new(
                solar_date(year, exception.month_day)?,
                &exception.name,
            ));
        }

        let mut seen = HashSet::with_capacity(holidays.len());
        holidays.retain(|h| seen.insert((h.date, h.name.clone())));
        holidays.sort_by_key(|h| h.date);

        tracing::debug!(year, count = holidays.len(), "resolved holidays");
        Ok(holidays)
    }
}

fn solar_date(year: u16, month_day: MonthDay) -> Result<Date> {
    Date::from_ymd(year, month_day.month(), month_day.day()).map_err(|_| {
        Error::InvalidCalendarDate(format!("{year}-{month_day} does not exist"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_rules::HolidayRule;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn resolver(rules: Vec<HolidayRule>) -> HolidayResolver {
        HolidayResolver::korean(Arc::new(RuleStore::from_rules(rules).unwrap()))
    }

    #[test]
    fn festival_window_is_named_and_ordered() {
        let r = resolver(vec![HolidayRule::festival(1, 1, "설날").unwrap()]);
        let holidays = r.resolve(2024).unwrap();
        let got: Vec<_> = holidays.iter().map(|h| (h.date, h.name.as_str())).collect();
        assert_eq!(
            got,
            [
                (date(2024, 2, 9), "설날 전날"),
                (date(2024, 2, 10), "설날"),
                (date(2024, 2, 11), "설날 다음날"),
            ]
        );
    }

    #[test]
    fn same_date_different_names_are_kept_in_insertion_order() {
        let r = resolver(vec![
            HolidayRule::solar(5, 5, "어린이날").unwrap(),
            HolidayRule::lunar(4, 8, "석가탄신일").unwrap(),
        ]);
        // Lunar 2025-04-08 is 2025-05-05.
        let names: Vec<_> = r.resolve(2025).unwrap().into_iter().map(|h| h.name).collect();
        assert_eq!(names, ["어린이날", "석가탄신일"]);
    }

    #[test]
    fn exact_duplicates_are_emitted_once() {
        let r = resolver(vec![
            HolidayRule::solar(3, 3, "겹침").unwrap(),
            HolidayRule::exception(2025, 3, 3, "겹침").unwrap(),
        ]);
        assert_eq!(r.resolve(2025).unwrap().len(), 1);
    }

    #[test]
    fn feb_29_rule_fails_in_common_years() {
        let r = resolver(vec![HolidayRule::solar(2, 29, "윤일").unwrap()]);
        assert!(r.resolve(2024).is_ok());
        assert!(matches!(r.resolve(2023), Err(Error::InvalidCalendarDate(_))));
    }

    #[test]
    fn exception_on_missing_day_fails() {
        let r = resolver(vec![
            HolidayRule::solar(1, 1, "신정").unwrap(),
            HolidayRule::exception(2025, 2, 29, "윤일 임시").unwrap(),
        ]);
        assert!(matches!(r.resolve(2025), Err(Error::InvalidCalendarDate(_))));
        // Other years never look at the 2025 exception.
        assert_eq!(r.resolve(2024).unwrap().len(), 1);
    }

    #[test]
    fn missing_lunar_day_fails() {
        // Lunar 2024-01 has 29 days.
        let r = resolver(vec![HolidayRule::lunar(1, 30, "그믐").unwrap()]);
        assert!(matches!(r.resolve(2024), Err(Error::InvalidLunarDate(_))));
    }

    #[test]
    fn out_of_range_year() {
        let r = resolver(Vec::new());
        assert!(matches!(r.resolve(1899), Err(Error::InvalidYearFormat(_))));
        assert!(matches!(r.resolve(2051), Err(Error::InvalidYearFormat(_))));
        assert!(r.resolve(2050).unwrap().is_empty());
    }

    #[test]
    fn range_cannot_exceed_converter() {
        let r = resolver(Vec::new());
        let wide = YearRange::new(1900, 2100).unwrap();
        assert!(matches!(r.clone().with_range(wide), Err(Error::Config(_))));
        let narrow = r.with_range(YearRange::new(2000, 2030).unwrap()).unwrap();
        assert!(matches!(narrow.resolve(2031), Err(Error::InvalidYearFormat(_))));
    }

    #[test]
    fn cached_and_uncached_agree() {
        let store = Arc::new(RuleStore::builtin());
        let plain = HolidayResolver::korean(store.clone());
        let cached = HolidayResolver::korean(store).with_cache();
        for year in [2024, 2025, 2024] {
            assert_eq!(plain.resolve(year).unwrap(), cached.resolve(year).unwrap());
        }
    }
}
