//! Query API scenarios against the built-in rule set.

use hk_core::Error;
use hk_query::{KoreanHolidays, QueryConfig};
use hk_rules::RuleStore;
use hk_time::Date;
use proptest::prelude::*;
use std::io::Write;
use std::sync::{Arc, LazyLock};

static HOLIDAYS: LazyLock<KoreanHolidays> = LazyLock::new(KoreanHolidays::builtin);

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn year_2024_starts_with_new_years_day() {
    let holidays = HOLIDAYS.holidays_of_year("2024").unwrap();
    assert_eq!(holidays[0].date, date(2024, 1, 1));
    assert_eq!(holidays[0].name, "신정");
}

#[test]
fn seollal_2024() {
    for day in ["2024-02-09", "2024-02-10", "2024-02-11", "2024-02-12"] {
        assert!(HOLIDAYS.is_holiday(day).unwrap(), "{day}");
    }
    assert!(!HOLIDAYS.is_holiday("2024-02-13").unwrap());
}

#[test]
fn ordinary_days_are_not_holidays() {
    for day in ["2024-04-22", "2024-01-02", "2024-07-01"] {
        assert!(!HOLIDAYS.is_holiday(day).unwrap(), "{day}");
    }
}

#[test]
fn labour_day_and_election_day() {
    assert!(HOLIDAYS.is_holiday("2024-05-01").unwrap());
    assert!(HOLIDAYS.is_holiday("2024-04-10").unwrap());
    assert!(!HOLIDAYS.is_holiday("2025-04-10").unwrap());
}

#[test]
fn year_exception_names() {
    let names = |d| HOLIDAYS.holiday_names_on(d).unwrap();
    assert_eq!(names(date(2024, 4, 10)), ["제22대 국회의원 선거일"]);
    assert_eq!(names(date(2025, 1, 27)), ["임시 공휴일"]);
    assert_eq!(names(date(2025, 6, 3)), ["제21대 대통령 선거일"]);
    assert_eq!(names(date(2025, 10, 8)), ["대체 공휴일(추석)"]);
    assert_eq!(names(date(2026, 6, 3)), ["제9회 전국동시지방선거일"]);
    assert!(names(date(2024, 4, 22)).is_empty());
}

#[test]
fn chuseok_2024() {
    let between = HOLIDAYS
        .holidays_between(date(2024, 9, 1), date(2024, 9, 30))
        .unwrap();
    let got: Vec<_> = between.iter().map(|h| (h.date, h.name.as_str())).collect();
    assert_eq!(
        got,
        [
            (date(2024, 9, 16), "추석 전날"),
            (date(2024, 9, 17), "추석"),
            (date(2024, 9, 18), "추석 다음날"),
        ]
    );
}

#[test]
fn holidays_between_crosses_years() {
    let between = HOLIDAYS
        .holidays_between(date(2024, 12, 25), date(2025, 1, 1))
        .unwrap();
    let names: Vec<_> = between.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["크리스마스", "신정"]);
    assert!(HOLIDAYS
        .holidays_between(date(2025, 1, 1), date(2024, 1, 1))
        .unwrap()
        .is_empty());
}

#[test]
fn malformed_dates() {
    for input in [
        "2024-02-30",
        "2024-13-01",
        "2024-1-1",
        "24-01-01",
        "2024/01/01",
        "",
        " 2024-02-10 ",
        "2024-02-10\n",
    ] {
        assert!(
            matches!(HOLIDAYS.is_holiday(input), Err(Error::InvalidDateFormat(_))),
            "{input:?}"
        );
    }
}

#[test]
fn malformed_years() {
    for input in ["20XX", "", "2024.0", "1899", "2051", " 2024", "2024\n"] {
        assert!(
            matches!(HOLIDAYS.holidays_of_year(input), Err(Error::InvalidYearFormat(_))),
            "{input:?}"
        );
    }
    assert!(matches!(
        HOLIDAYS.is_holiday("2060-01-01"),
        Err(Error::InvalidYearFormat(_))
    ));
}

#[test]
fn business_calendar_from_facade() {
    use hk_time::Calendar;
    let cal = HOLIDAYS.business_calendar(2025, 2025).unwrap();
    assert!(!cal.is_business_day(date(2025, 10, 8)));
    assert!(cal.is_business_day(date(2025, 10, 10)));
}

#[test]
fn config_file_limits_years() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "utc_offset_hours = 0\nexception_margin = 1").unwrap();
    let config = QueryConfig::from_path(file.path()).unwrap();
    let holidays = KoreanHolidays::from_config(Arc::new(RuleStore::builtin()), &config).unwrap();
    assert_eq!(holidays.utc_offset().local_minus_utc(), 0);
    assert!(holidays.holidays_of_year("2027").is_ok());
    assert!(matches!(
        holidays.holidays_of_year("2028"),
        Err(Error::InvalidYearFormat(_))
    ));
}

proptest! {
    #[test]
    fn is_holiday_matches_holidays_of_year(serial in 1i32..55_000) {
        // Serials 1..55_000 cover 1900-01-01 through 2050-07-31.
        let d = Date::from_serial(serial).unwrap();
        let listed = HOLIDAYS
            .holidays_of_year(&d.year().to_string())
            .unwrap()
            .iter()
            .any(|h| h.date == d);
        prop_assert_eq!(HOLIDAYS.is_holiday(&d.to_string()).unwrap(), listed);
    }
}
