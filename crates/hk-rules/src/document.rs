//! The rule document exchanged with rule sources.
//!
//! ```json
//! {
//!   "solar_holidays":  [{ "date": "01-01", "name": "신정" }],
//!   "lunar_holidays":  [{ "date": "01-01", "name": "설날", "major_festival": true }],
//!   "year_specific_holidays": { "2024": [{ "date": "02-12", "name": "대체 공휴일(설날)" }] }
//! }
//! ```

use crate::rule::{HolidayRule, LunarRule, MonthDay, SolarRule, YearException};
use hk_core::errors::{Error, Result};
use hk_core::utilities::data_parsers::parse_year;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lunar months whose holidays get the surrounding-day window when a
/// document entry carries no explicit `major_festival` flag (Seollal and
/// Chuseok).
pub const DEFAULT_FESTIVAL_MONTHS: [u8; 2] = [1, 8];

/// A solar or year-specific entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// `MM-DD`.
    pub date: String,
    /// Holiday name.
    pub name: String,
}

/// A lunar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarEntry {
    /// Lunar `MM-DD`.
    pub date: String,
    /// Holiday name.
    pub name: String,
    /// Explicit window flag; see [`DEFAULT_FESTIVAL_MONTHS`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_festival: Option<bool>,
}

/// A complete rule document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDocument {
    /// Fixed solar holidays.
    pub solar_holidays: Vec<RuleEntry>,
    /// Fixed lunar holidays.
    pub lunar_holidays: Vec<LunarEntry>,
    /// Year (as a decimal string) → holidays of that year only.  A year key
    /// may appear once.
    #[serde(deserialize_with = "unique_year_keys")]
    pub year_specific_holidays: BTreeMap<String, Vec<RuleEntry>>,
}

impl RuleDocument {
    /// Parse a JSON document.
    ///
    /// # Errors
    /// [`Error::DataIntegrity`] if the JSON does not have the document shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::DataIntegrity(format!("non-conforming rule document: {e}")))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::DataIntegrity(format!("cannot serialize rule document: {e}")))
    }

    /// Convert every entry into a validated [`HolidayRule`], in document
    /// order (solar, lunar, then years ascending).
    pub fn into_rules(self) -> Result<Vec<HolidayRule>> {
        let mut rules = Vec::with_capacity(
            self.solar_holidays.len()
                + self.lunar_holidays.len()
                + self.year_specific_holidays.values().map(Vec::len).sum::<usize>(),
        );

        for entry in self.solar_holidays {
            rules.push(HolidayRule::FixedSolar(SolarRule {
                month_day: MonthDay::parse_solar(&entry.date)?,
                name: entry.name,
            }));
        }

        for entry in self.lunar_holidays {
            let month_day = MonthDay::parse_lunar(&entry.date)?;
            let major_festival = entry
                .major_festival
                .unwrap_or_else(|| DEFAULT_FESTIVAL_MONTHS.contains(&month_day.month()));
            rules.push(HolidayRule::FixedLunar(LunarRule {
                month_day,
                name: entry.name,
                major_festival,
            }));
        }

        let mut years = BTreeMap::new();
        for (key, entries) in self.year_specific_holidays {
            let year = parse_year(&key)
                .and_then(|y| u16::try_from(y).ok())
                .ok_or_else(|| Error::DataIntegrity(format!("invalid year key {key:?}")))?;
            if years.insert(year, entries).is_some() {
                return Err(Error::DataIntegrity(format!(
                    "year {year} appears under more than one key"
                )));
            }
        }

        for (year, entries) in years {
            for entry in entries {
                rules.push(HolidayRule::YearException(YearException {
                    year,
                    month_day: MonthDay::parse_solar(&entry.date)?,
                    name: entry.name,
                }));
            }
        }
        Ok(rules)
    }
}

/// Reads the year map, rejecting a key that occurs twice in the JSON
/// object instead of letting the later entry replace the earlier one.
fn unique_year_keys<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Vec<RuleEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct YearMap;

    impl<'de> Visitor<'de> for YearMap {
        type Value = BTreeMap<String, Vec<RuleEntry>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from year to holiday entries")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut years = BTreeMap::new();
            while let Some((key, entries)) = access.next_entry::<String, Vec<RuleEntry>>()? {
                if years.contains_key(&key) {
                    return Err(de::Error::custom(format_args!("duplicate year key {key:?}")));
                }
                years.insert(key, entries);
            }
            Ok(years)
        }
    }

    deserializer.deserialize_map(YearMap)
}
