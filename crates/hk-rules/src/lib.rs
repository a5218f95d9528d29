//! # hk-rules
//!
//! Holiday rules and where they come from: the rule schema, the validated
//! immutable [`RuleStore`], the JSON rule document, the built-in rule table,
//! and bounded-retry retrieval of documents from external sources.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Built-in rule table.
mod builtin;

/// JSON rule document.
pub mod document;

/// Rule retrieval with retry and backoff.
pub mod fetch;

/// Rule schema.
pub mod rule;

/// The immutable rule store.
pub mod store;

pub use document::{LunarEntry, RuleDocument, RuleEntry, DEFAULT_FESTIVAL_MONTHS};
#[cfg(feature = "remote")]
pub use fetch::HttpRuleSource;
pub use fetch::{BackoffPolicy, FileRuleSource, RuleFetcher, RuleSource, SourceError, DEFAULT_RULES_URL};
pub use rule::{HolidayRule, LunarRule, MonthDay, SolarRule, YearException};
pub use store::RuleStore;
