//! Retrieval of rule documents from an external source.
//!
//! The resolution engine never touches the network.  A [`RuleFetcher`]
//! pulls the document body from a [`RuleSource`], retries transient
//! failures according to a [`BackoffPolicy`], and hands back a finished
//! [`RuleStore`] or a terminal [`Error::RuleSource`].

use crate::store::RuleStore;
use hk_core::errors::{Error, Result};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

/// Location of the published rule document.
pub const DEFAULT_RULES_URL: &str =
    "https://raw.githubusercontent.com/6mini/holidayskr/main/holidayskr.json";

/// Transport-level failure reported by a [`RuleSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    message: String,
    retryable: bool,
}

impl SourceError {
    /// A transient failure worth retrying.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    /// A failure that retrying cannot fix.
    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether another attempt may succeed.
    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceError {}

/// Something that can produce the raw text of a rule document.
pub trait RuleSource: Send + Sync {
    /// Short description used in log events and errors.
    fn describe(&self) -> String;

    /// Fetch the document body.
    fn fetch(&self) -> std::result::Result<String, SourceError>;
}

/// Exponential backoff between retrieval attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
    /// Growth factor between consecutive delays.
    pub multiplier: f64,
    /// Retries after the first attempt; total attempts = `max_retries + 1`.
    pub max_retries: u32,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            multiplier: 2.0,
            max_retries: 3,
        }
    }
}

impl BackoffPolicy {
    /// Delay before retry number `retry_count` (0-based), or `None` once the
    /// retry budget is spent.
    ///
    /// The delay always lies in `[0, max_delay]`; a negative or non-finite
    /// product (e.g. from a negative `multiplier`) retries immediately.
    pub fn retry_delay(&self, retry_count: u32) -> Option<Duration> {
        if retry_count >= self.max_retries {
            return None;
        }
        let scale = self.multiplier.powf(f64::from(retry_count));
        let seconds = self.initial_delay.as_secs_f64() * scale;
        let delay = if seconds.is_nan() {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(seconds).unwrap_or(if seconds > 0.0 {
                self.max_delay
            } else {
                Duration::ZERO
            })
        };
        Some(delay.min(self.max_delay))
    }
}

/// Fetches a rule document with bounded retries and builds a [`RuleStore`].
pub struct RuleFetcher<S> {
    source: S,
    policy: BackoffPolicy,
}

impl<S: RuleSource> RuleFetcher<S> {
    /// Fetcher with the default [`BackoffPolicy`].
    pub fn new(source: S) -> Self {
        Self::with_policy(source, BackoffPolicy::default())
    }

    /// Fetcher with an explicit policy.
    pub fn with_policy(source: S, policy: BackoffPolicy) -> Self {
        Self { source, policy }
    }

    /// Retrieve the document body, retrying retryable failures.
    ///
    /// # Errors
    /// [`Error::RuleSource`] after a non-retryable failure or once the retry
    /// budget is exhausted.
    pub fn fetch_body(&self) -> Result<String> {
        let origin = self.source.describe();
        let mut retry_count = 0;
        loop {
            match self.source.fetch() {
                Ok(body) => {
                    tracing::debug!(%origin, attempts = retry_count + 1, "rule document fetched");
                    return Ok(body);
                }
                Err(err) if !err.retryable() => {
                    return Err(Error::RuleSource(format!("{origin}: {err}")));
                }
                Err(err) => match self.policy.retry_delay(retry_count) {
                    Some(delay) => {
                        tracing::warn!(%origin, error = %err, ?delay, "rule fetch failed, retrying");
                        std::thread::sleep(delay);
                        retry_count += 1;
                    }
                    None => {
                        return Err(Error::RuleSource(format!(
                            "{origin}: giving up after {} attempts: {err}",
                            retry_count + 1
                        )));
                    }
                },
            }
        }
    }

    /// Retrieve, parse and validate the rule document.
    pub fn load(&self) -> Result<RuleStore> {
        RuleStore::from_json_str(&self.fetch_body()?)
    }
}

/// Reads the rule document from a local file.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleSource for FileRuleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> std::result::Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                SourceError::non_retryable(e.to_string())
            }
            _ => SourceError::new(e.to_string()),
        })
    }
}

/// Downloads the rule document over HTTP(S).
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpRuleSource {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl HttpRuleSource {
    /// Source for the published rule document.
    pub fn published() -> Result<Self> {
        Self::new(DEFAULT_RULES_URL)
    }

    /// Source for an arbitrary URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("holidayskr/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::RuleSource(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[cfg(feature = "remote")]
impl RuleSource for HttpRuleSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> std::result::Result<String, SourceError> {
        let response = self.client.get(&self.url).send().map_err(|e| {
            if e.is_timeout() {
                SourceError::new(format!("request timeout: {e}"))
            } else if e.is_connect() {
                SourceError::new(format!("connection failed: {e}"))
            } else {
                SourceError::new(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = format!("HTTP status {status}");
            return Err(if status.is_server_error() || status.as_u16() == 429 {
                SourceError::new(message)
            } else {
                SourceError::non_retryable(message)
            });
        }
        response
            .text()
            .map_err(|e| SourceError::new(format!("failed to read response body: {e}")))
    }
}
