//! # hk-resolver
//!
//! Turns a [`RuleStore`](hk_rules::RuleStore) into concrete, sorted holiday
//! lists per year.
//!
//! - [`HolidayResolver`]: the resolution engine.
//! - [`ResolvedHoliday`]: one `(date, name)` occurrence.
//! - [`YearRange`]: the years a resolver answers for.
//! - [`YearCache`]: optional per-year memo.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod range;
pub mod resolved;
pub mod resolver;

pub use cache::YearCache;
pub use range::YearRange;
pub use resolved::ResolvedHoliday;
pub use resolver::{HolidayResolver, DAY_AFTER, DAY_BEFORE};
