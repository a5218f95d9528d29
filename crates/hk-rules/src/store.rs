//! `RuleStore`: the immutable set of holiday rules.
//!
//! A store is built once, validated for duplicate keys, and never mutated
//! afterwards.  Consumers share it behind an `Arc`; anyone who needs fresh
//! data builds a new store.

use crate::document::RuleDocument;
use crate::rule::{HolidayRule, LunarRule, MonthDay, SolarRule, YearException};
use hk_core::errors::{Error, Result};
use hk_core::fail;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Validated holiday rules, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStore {
    solar: Vec<SolarRule>,
    lunar: Vec<LunarRule>,
    exceptions: BTreeMap<u16, Vec<YearException>>,
}

impl RuleStore {
    /// Build a store from rules of any category, keeping their order within
    /// each category.
    ///
    /// # Errors
    /// [`Error::DataIntegrity`] if two solar rules or two lunar rules share
    /// a month-day, or two exceptions share a (year, month-day).
    pub fn from_rules<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = HolidayRule>,
    {
        let mut store = RuleStore::default();
        let mut solar_keys: HashSet<MonthDay> = HashSet::new();
        let mut lunar_keys: HashSet<MonthDay> = HashSet::new();
        let mut exception_keys: HashSet<(u16, MonthDay)> = HashSet::new();

        for rule in rules {
            match rule {
                HolidayRule::FixedSolar(r) => {
                    if !solar_keys.insert(r.month_day) {
                        fail!(
                            DataIntegrity,
                            "duplicate solar holiday on {} ({})",
                            r.month_day,
                            r.name
                        );
                    }
                    store.solar.push(r);
                }
                HolidayRule::FixedLunar(r) => {
                    if !lunar_keys.insert(r.month_day) {
                        fail!(
                            DataIntegrity,
                            "duplicate lunar holiday on {} ({})",
                            r.month_day,
                            r.name
                        );
                    }
                    store.lunar.push(r);
                }
                HolidayRule::YearException(r) => {
                    if !exception_keys.insert((r.year, r.month_day)) {
                        fail!(
                            DataIntegrity,
                            "duplicate {} holiday on {} ({})",
                            r.year,
                            r.month_day,
                            r.name
                        );
                    }
                    store.exceptions.entry(r.year).or_default().push(r);
                }
            }
        }

        tracing::info!(
            solar = store.solar.len(),
            lunar = store.lunar.len(),
            exception_years = store.exceptions.len(),
            "holiday rule store loaded"
        );
        Ok(store)
    }

    /// Build a store from a parsed rule document.
    pub fn from_document(document: RuleDocument) -> Result<Self> {
        Self::from_rules(document.into_rules()?)
    }

    /// Parse a JSON rule document and build a store from it.
    ///
    /// # Errors
    /// [`Error::DataIntegrity`] if the text is not a conforming document or
    /// its rules fail validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_document(RuleDocument::from_json_str(json)?)
    }

    /// Read a JSON rule document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::RuleSource(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// The rule set compiled into the library.
    pub fn builtin() -> Self {
        crate::builtin::rules()
            .and_then(Self::from_rules)
            .expect("built-in holiday rules are valid")
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Fixed solar rules in load order.
    pub fn solar_rules(&self) -> &[SolarRule] {
        &self.solar
    }

    /// Fixed lunar rules in load order.
    pub fn lunar_rules(&self) -> &[LunarRule] {
        &self.lunar
    }

    /// Exceptions registered for `year` (empty if none).
    pub fn exceptions(&self, year: u16) -> &[YearException] {
        self.exceptions.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Years with at least one exception, ascending.
    pub fn exception_years(&self) -> impl Iterator<Item = u16> + '_ {
        self.exceptions.keys().copied()
    }

    /// The latest year with exception data, if any.
    pub fn latest_exception_year(&self) -> Option<u16> {
        self.exceptions.keys().next_back().copied()
    }

    /// Total number of rules across all categories.
    pub fn len(&self) -> usize {
        self.solar.len() + self.lunar.len() + self.exceptions.values().map(Vec::len).sum::<usize>()
    }

    /// Return `true` if the store holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
