//! # hk-query
//!
//! The public query surface over resolved Korean holidays.
//!
//! - [`KoreanHolidays`]: `is_holiday`, `holidays_of_year`,
//!   `is_today_holiday` and their typed variants.
//! - [`QueryConfig`]: TOML-loadable settings.
//! - [`SouthKorea`]: a business-day [`Calendar`](hk_time::Calendar).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod facade;
pub mod south_korea;

pub use config::QueryConfig;
pub use facade::{KoreanHolidays, KST_OFFSET_SECONDS};
pub use south_korea::SouthKorea;
