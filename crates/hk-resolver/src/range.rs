//! Supported year range.

use hk_core::errors::{Error, Result};
use hk_core::ensure;
use hk_lunar::LunisolarConverter;
use hk_rules::RuleStore;

/// Inclusive range of years the resolver answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: u16,
    max: u16,
}

impl YearRange {
    /// Range `[min, max]`.
    ///
    /// # Errors
    /// [`Error::Config`] if `min > max`.
    pub fn new(min: u16, max: u16) -> Result<Self> {
        ensure!(min <= max, Config, "year range [{min}, {max}] is empty");
        Ok(Self { min, max })
    }

    /// Every year the converter has lunar data for.
    pub fn of_converter(converter: &dyn LunisolarConverter) -> Self {
        let years = converter.supported_years();
        Self {
            min: *years.start(),
            max: *years.end(),
        }
    }

    /// The converter's range, capped at the latest year with exception data
    /// plus `margin` years.  Without exception data the converter's range is
    /// returned unchanged.
    pub fn exception_horizon(
        converter: &dyn LunisolarConverter,
        store: &RuleStore,
        margin: u16,
    ) -> Self {
        let full = Self::of_converter(converter);
        match store.latest_exception_year() {
            Some(latest) => Self {
                min: full.min,
                max: latest.saturating_add(margin).clamp(full.min, full.max),
            },
            None => full,
        }
    }

    /// First supported year.
    pub fn min(&self) -> u16 {
        self.min
    }

    /// Last supported year.
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Return `true` if `year` is supported.
    pub fn contains(&self, year: i32) -> bool {
        (i32::from(self.min)..=i32::from(self.max)).contains(&year)
    }

    /// Return `true` if every year of `other` is inside `self`.
    pub fn covers(&self, other: &YearRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Validate `year` against the range.
    ///
    /// # Errors
    /// [`Error::InvalidYearFormat`] if `year` is outside the range.
    pub fn check(&self, year: i32) -> Result<u16> {
        if !self.contains(year) {
            return Err(Error::InvalidYearFormat(format!(
                "{year} is outside the supported range [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(year as u16)
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
