//! Rule table compiled into the library.
//!
//! Mirrors the published `holidayskr.json` rule document.  Year-specific
//! entries need a yearly update once substitute and temporary holidays for
//! the next year are announced.

use crate::rule::HolidayRule;
use hk_core::errors::Result;

/// (month, day, name)
const SOLAR: &[(u8, u8, &str)] = &[
    (1, 1, "신정"),
    (3, 1, "3·1절"),
    (5, 1, "근로자의 날"),
    (5, 5, "어린이날"),
    (6, 6, "현충일"),
    (8, 15, "광복절"),
    (10, 3, "개천절"),
    (10, 9, "한글날"),
    (12, 25, "크리스마스"),
];

/// (lunar month, lunar day, name, observed with surrounding days)
const LUNAR: &[(u8, u8, &str, bool)] = &[
    (1, 1, "설날", true),
    (4, 8, "석가탄신일", false),
    (8, 15, "추석", true),
];

/// (year, month, day, name)
const YEAR_SPECIFIC: &[(u16, u8, u8, &str)] = &[
    (2024, 2, 12, "대체 공휴일(설날)"),
    (2024, 4, 10, "제22대 국회의원 선거일"),
    (2024, 5, 6, "대체 공휴일(어린이날)"),
    (2024, 10, 1, "국군의 날"),
    (2025, 1, 27, "임시 공휴일"),
    (2025, 3, 3, "대체 공휴일(3·1절)"),
    (2025, 5, 6, "대체 공휴일(어린이날, 석가탄신일)"),
    (2025, 6, 3, "제21대 대통령 선거일"),
    (2025, 10, 8, "대체 공휴일(추석)"),
    (2026, 3, 2, "대체 공휴일(3·1절)"),
    (2026, 5, 25, "대체 공휴일(석가탄신일)"),
    (2026, 6, 3, "제9회 전국동시지방선거일"),
    (2026, 8, 17, "대체 공휴일(광복절)"),
    (2026, 10, 5, "대체 공휴일(개천절)"),
];

/// All built-in rules: solar, then lunar, then year-specific.
pub(crate) fn rules() -> Result<Vec<HolidayRule>> {
    let solar = SOLAR
        .iter()
        .map(|&(m, d, name)| HolidayRule::solar(m, d, name));
    let lunar = LUNAR.iter().map(|&(m, d, name, window)| {
        if window {
            HolidayRule::festival(m, d, name)
        } else {
            HolidayRule::lunar(m, d, name)
        }
    });
    let year_specific = YEAR_SPECIFIC
        .iter()
        .map(|&(y, m, d, name)| HolidayRule::exception(y, m, d, name));
    solar.chain(lunar).chain(year_specific).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules_validate() {
        let rules = rules().unwrap();
        assert_eq!(rules.len(), SOLAR.len() + LUNAR.len() + YEAR_SPECIFIC.len());
    }
}
