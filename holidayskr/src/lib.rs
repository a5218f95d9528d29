//! # holidayskr
//!
//! Korean public holidays: fixed solar dates, fixed lunar dates converted
//! per year, and year-specific exceptions (substitute holidays, election
//! days, temporary holidays) resolved into one sorted calendar per year.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `hk-*` workspace crates.  Application code should depend on this crate
//! rather than the individual crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! holidayskr = "0.1"
//! ```
//!
//! ```rust
//! use holidayskr::KoreanHolidays;
//!
//! let holidays = KoreanHolidays::builtin();
//! assert!(holidays.is_holiday("2024-02-12").unwrap());
//!
//! let year = holidays.holidays_of_year("2024").unwrap();
//! assert_eq!(year[0].name, "신정");
//! ```
//!
//! Loading rules from a file instead of the built-in table:
//!
//! ```no_run
//! use holidayskr::{FileRuleSource, HolidayResolver, KoreanHolidays, RuleFetcher};
//! use std::sync::Arc;
//!
//! let store = RuleFetcher::new(FileRuleSource::new("holidayskr.json")).load()?;
//! let holidays = KoreanHolidays::new(HolidayResolver::korean(Arc::new(store)));
//! # Ok::<(), holidayskr::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and parsing helpers.
pub use hk_core as core;

/// Dates, weekdays and the business-day calendar trait.
pub use hk_time as time;

/// Korean lunisolar calendar.
pub use hk_lunar as lunar;

/// Holiday rules, the rule store and rule retrieval.
pub use hk_rules as rules;

/// Per-year holiday resolution.
pub use hk_resolver as resolver;

/// Query API and the South Korea calendar.
pub use hk_query as query;

pub use hk_core::{Error, Result};
pub use hk_lunar::{KoreanLunarCalendar, LunarDate, LunisolarConverter};
pub use hk_query::{KoreanHolidays, QueryConfig, SouthKorea};
pub use hk_resolver::{HolidayResolver, ResolvedHoliday, YearRange};
#[cfg(feature = "remote")]
pub use hk_rules::HttpRuleSource;
pub use hk_rules::{
    BackoffPolicy, FileRuleSource, HolidayRule, RuleDocument, RuleFetcher, RuleSource, RuleStore,
};
pub use hk_time::{BusinessDayConvention, Calendar, Date, Weekday};
