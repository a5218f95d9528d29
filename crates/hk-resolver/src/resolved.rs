//! `ResolvedHoliday`: one concrete holiday occurrence.

use hk_time::Date;
use serde::Serialize;

/// A holiday on a concrete date.
///
/// Several entries may share a date when their names differ.  Serializes as
/// `{"date": "YYYY-MM-DD", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedHoliday {
    /// Solar date of the occurrence.
    pub date: Date,
    /// Holiday name.
    pub name: String,
}

impl ResolvedHoliday {
    /// Holiday `name` on `date`.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResolvedHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_date_as_iso_string() {
        let holiday = ResolvedHoliday::new(Date::from_ymd(2024, 1, 1).unwrap(), "신정");
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01","name":"신정"}"#);
        assert_eq!(holiday.to_string(), "2024-01-01 신정");
    }
}
