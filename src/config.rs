//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then the environment, then
//! command-line overrides applied by the CLI. [`Config::validate`] runs last.

use crate::constants::{
    DEFAULT_LINK_PATTERN, DEFAULT_SKIP_LINES, EXPECTED_COLUMNS, SOURCE_URL_ENV,
};
use crate::{Error, Result};
use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for fetching and parsing the choreography sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Absolute http(s) URL of the published CSV
    pub source_url: String,

    /// Banner/header lines discarded before the first data row
    pub skip_lines: usize,

    /// Columns a data row must carry
    pub expected_columns: usize,

    /// Regular expression every attachment link must match
    pub link_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            skip_lines: DEFAULT_SKIP_LINES,
            expected_columns: EXPECTED_COLUMNS,
            link_pattern: DEFAULT_LINK_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(SOURCE_URL_ENV) {
            debug!("Using source URL from {}", SOURCE_URL_ENV);
            config.source_url = url;
        }
        config
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    pub fn with_expected_columns(mut self, expected_columns: usize) -> Self {
        self.expected_columns = expected_columns;
        self
    }

    pub fn with_link_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.link_pattern = pattern.into();
        self
    }

    /// Validate everything except the source URL
    ///
    /// Parsing a local file needs no URL, so that check lives in
    /// [`Config::source_url`].
    pub fn validate_parsing(&self) -> Result<()> {
        if self.expected_columns == 0 {
            return Err(Error::configuration("expected_columns must be at least 1"));
        }
        self.link_regex()?;
        Ok(())
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_parsing()?;
        self.source_url()?;
        Ok(())
    }

    /// The source URL, checked to be an absolute http(s) address
    pub fn source_url(&self) -> Result<Url> {
        if self.source_url.trim().is_empty() {
            return Err(Error::configuration(format!(
                "No source URL configured (set {} or pass --url)",
                SOURCE_URL_ENV
            )));
        }

        let url = Url::parse(self.source_url.trim()).map_err(|e| {
            Error::configuration(format!("Invalid source URL '{}': {}", self.source_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(Error::configuration(format!(
                "Unsupported URL scheme '{}' in '{}' (expected http or https)",
                scheme, self.source_url
            ))),
        }
    }

    /// Compile the link pattern
    pub fn link_regex(&self) -> Result<Regex> {
        Regex::new(&self.link_pattern).map_err(|e| {
            Error::configuration(format!("Invalid link pattern '{}': {}", self.link_pattern, e))
        })
    }
}
