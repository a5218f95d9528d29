//! Resolution properties over the built-in rule set.

use hk_core::Error;
use hk_lunar::{KoreanLunarCalendar, LunisolarConverter};
use hk_resolver::{HolidayResolver, ResolvedHoliday, YearRange, DAY_AFTER, DAY_BEFORE};
use hk_rules::{HolidayRule, RuleStore};
use hk_time::Date;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

static BUILTIN: LazyLock<HolidayResolver> =
    LazyLock::new(|| HolidayResolver::korean(Arc::new(RuleStore::builtin())).with_cache());

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn names_on(holidays: &[ResolvedHoliday], on: Date) -> Vec<&str> {
    holidays
        .iter()
        .filter(|h| h.date == on)
        .map(|h| h.name.as_str())
        .collect()
}

#[test]
fn new_year_2024() {
    let holidays = BUILTIN.resolve(2024).unwrap();
    assert_eq!(holidays[0], ResolvedHoliday::new(date(2024, 1, 1), "신정"));
}

#[test]
fn seollal_2024_window() {
    let holidays = BUILTIN.resolve(2024).unwrap();
    assert_eq!(names_on(&holidays, date(2024, 2, 9)), ["설날 전날"]);
    assert_eq!(names_on(&holidays, date(2024, 2, 10)), ["설날"]);
    assert_eq!(names_on(&holidays, date(2024, 2, 11)), ["설날 다음날"]);
    assert_eq!(names_on(&holidays, date(2024, 2, 12)), ["대체 공휴일(설날)"]);
}

#[test]
fn chuseok_2024_window() {
    let holidays = BUILTIN.resolve(2024).unwrap();
    for (day, name) in [(16, "추석 전날"), (17, "추석"), (18, "추석 다음날")] {
        assert_eq!(names_on(&holidays, date(2024, 9, day)), [name]);
    }
}

#[test]
fn shared_dates_keep_both_names() {
    // Children's Day and Buddha's Birthday coincide in 2025.
    let holidays = BUILTIN.resolve(2025).unwrap();
    assert_eq!(names_on(&holidays, date(2025, 5, 5)), ["어린이날", "석가탄신일"]);
}

#[test]
fn exceptions_of_2024() {
    let holidays = BUILTIN.resolve(2024).unwrap();
    assert_eq!(names_on(&holidays, date(2024, 4, 10)), ["제22대 국회의원 선거일"]);
    assert_eq!(names_on(&holidays, date(2024, 10, 1)), ["국군의 날"]);
    assert!(names_on(&holidays, date(2024, 4, 22)).is_empty());
}

#[test]
fn holiday_dates_are_distinct() {
    let dates = BUILTIN.holiday_dates(2025).unwrap();
    let entries = BUILTIN.resolve(2025).unwrap();
    assert!(dates.len() < entries.len());
    assert!(dates.contains(&date(2025, 5, 5)));
    assert!(BUILTIN.is_holiday(date(2025, 6, 3)).unwrap());
    assert!(!BUILTIN.is_holiday(date(2025, 6, 4)).unwrap());
    assert_eq!(BUILTIN.holidays_on(date(2025, 1, 27)).unwrap().len(), 1);
}

#[test]
fn exception_horizon_limits_queries() {
    let store = Arc::new(RuleStore::builtin());
    let range = YearRange::exception_horizon(&KoreanLunarCalendar, &store, 2);
    let resolver = HolidayResolver::korean(store).with_range(range).unwrap();
    assert!(resolver.resolve(2028).is_ok());
    assert!(matches!(resolver.resolve(2029), Err(Error::InvalidYearFormat(_))));
}

#[test]
fn custom_rules_resolve_in_category_order() {
    let store = RuleStore::from_rules([
        HolidayRule::exception(2024, 2, 10, "임시").unwrap(),
        HolidayRule::festival(1, 1, "설날").unwrap(),
        HolidayRule::solar(2, 10, "양력").unwrap(),
    ])
    .unwrap();
    let resolver = HolidayResolver::korean(Arc::new(store));
    let holidays = resolver.resolve(2024).unwrap();
    assert_eq!(names_on(&holidays, date(2024, 2, 10)), ["양력", "설날", "임시"]);
}

#[test]
fn exception_naming_a_missing_day_is_an_error() {
    let store = RuleStore::from_rules([HolidayRule::exception(2025, 2, 29, "윤일 임시").unwrap()])
        .unwrap();
    let resolver = HolidayResolver::korean(Arc::new(store));
    assert!(matches!(resolver.resolve(2025), Err(Error::InvalidCalendarDate(_))));
    assert!(matches!(resolver.is_holiday(date(2025, 3, 1)), Err(Error::InvalidCalendarDate(_))));
}

proptest! {
    #[test]
    fn sorted_without_duplicate_pairs(year in 1900i32..=2050) {
        let holidays = BUILTIN.resolve(year).unwrap();
        prop_assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
        let pairs: HashSet<_> = holidays.iter().map(|h| (h.date, h.name.as_str())).collect();
        prop_assert_eq!(pairs.len(), holidays.len());
    }

    #[test]
    fn festivals_span_three_consecutive_days(year in 1900u16..=2050) {
        let holidays = BUILTIN.resolve(i32::from(year)).unwrap();
        for rule in BUILTIN.store().lunar_rules().iter().filter(|r| r.major_festival) {
            let find = |name: String| {
                holidays.iter().find(|h| h.name == name).map(|h| h.date).unwrap()
            };
            let day = find(rule.name.clone());
            prop_assert_eq!(find(format!("{} {DAY_BEFORE}", rule.name)), day - 1);
            prop_assert_eq!(find(format!("{} {DAY_AFTER}", rule.name)), day + 1);
            let expected = KoreanLunarCalendar
                .convert(year, rule.month_day.month(), rule.month_day.day(), 0)
                .unwrap();
            prop_assert_eq!(day, expected);
        }
    }

    #[test]
    fn exceptions_only_in_their_year(year in 1900u16..=2050) {
        let holidays = BUILTIN.resolve(i32::from(year)).unwrap();
        for exception_year in BUILTIN.store().exception_years() {
            for exception in BUILTIN.store().exceptions(exception_year) {
                let date = Date::from_ymd(
                    year,
                    exception.month_day.month(),
                    exception.month_day.day(),
                ).unwrap();
                let present = holidays
                    .iter()
                    .any(|h| h.date == date && h.name == exception.name);
                prop_assert_eq!(present, year == exception_year);
            }
        }
    }

    #[test]
    fn resolution_is_deterministic(year in 1900i32..=2050) {
        let fresh = HolidayResolver::korean(Arc::new(RuleStore::builtin()));
        prop_assert_eq!(fresh.resolve(year).unwrap(), BUILTIN.resolve(year).unwrap());
    }

    #[test]
    fn out_of_range_years_are_rejected(year in prop_oneof![i32::MIN..1900, 2051..i32::MAX]) {
        prop_assert!(matches!(BUILTIN.resolve(year), Err(Error::InvalidYearFormat(_))));
    }
}
