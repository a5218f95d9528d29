//! Query configuration.
//!
//! ```toml
//! utc_offset_hours = 9
//! min_year = 2000
//! exception_margin = 5
//! ```

use hk_core::errors::{Error, Result};
use hk_core::ensure;
use hk_lunar::LunisolarConverter;
use hk_resolver::YearRange;
use hk_rules::RuleStore;
use serde::Deserialize;
use std::path::Path;

/// Settings for [`KoreanHolidays`](crate::KoreanHolidays).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Fixed offset from UTC used to decide what "today" is.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i8,

    /// First supported year; defaults to the first year of the lunar data.
    #[serde(default)]
    pub min_year: Option<u16>,

    /// Last supported year; defaults to the last year of the lunar data,
    /// or to the exception horizon when `exception_margin` is set.
    #[serde(default)]
    pub max_year: Option<u16>,

    /// Answer only up to the latest year with exception data plus this many
    /// years.
    #[serde(default)]
    pub exception_margin: Option<u16>,
}

fn default_utc_offset_hours() -> i8 {
    9
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            min_year: None,
            max_year: None,
            exception_margin: None,
        }
    }
}

impl QueryConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    /// [`Error::Config`] on syntax errors, unknown keys or mistyped values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(format!("failed to parse TOML config: {e}")))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&toml_str)
    }

    /// The "today" offset in seconds east of UTC.
    ///
    /// # Errors
    /// [`Error::Config`] unless the offset lies in `[-12, 14]` hours.
    pub fn utc_offset_seconds(&self) -> Result<i32> {
        let hours = self.utc_offset_hours;
        ensure!(
            (-12..=14).contains(&hours),
            Config,
            "utc_offset_hours {hours} out of range [-12, 14]"
        );
        Ok(i32::from(hours) * 3600)
    }

    /// Resolve the configured years against the converter's data and the
    /// store's exceptions.
    ///
    /// # Errors
    /// [`Error::Config`] if the range is empty or reaches beyond the lunar
    /// data.
    pub fn year_range(
        &self,
        converter: &dyn LunisolarConverter,
        store: &RuleStore,
    ) -> Result<YearRange> {
        let available = YearRange::of_converter(converter);
        let base = match self.exception_margin {
            Some(margin) => YearRange::exception_horizon(converter, store, margin),
            None => available,
        };
        let range = YearRange::new(
            self.min_year.unwrap_or(base.min()),
            self.max_year.unwrap_or(base.max()),
        )?;
        ensure!(
            available.covers(&range),
            Config,
            "year range {range} exceeds the lunar data {available}"
        );
        Ok(range)
    }
}
