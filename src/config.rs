use crate::events::LogFormat;
use crate::format::DEFAULT_PRECISION;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub precision: usize,
    pub exit_keyword: String,
    pub prompt: String,
    pub log_format: LogFormat,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
            prompt: String::new(),
            log_format: LogFormat::Pretty,
            log_file: None,
        }
    }
}

impl Config {
    /// Build the configuration from `RPN_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let precision = match lookup("RPN_PRECISION") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "RPN_PRECISION must be a non-negative integer, got '{}'; using {}",
                    raw, defaults.precision
                );
                defaults.precision
            }),
            None => defaults.precision,
        };

        Config {
            precision,
            exit_keyword: lookup("RPN_EXIT_KEYWORD")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.exit_keyword),
            prompt: lookup("RPN_PROMPT").unwrap_or(defaults.prompt),
            log_format: lookup("RPN_LOG_FORMAT")
                .map(|s| LogFormat::from_str(&s))
                .unwrap_or(defaults.log_format),
            log_file: lookup("RPN_LOG_FILE").filter(|s| !s.is_empty()),
        }
    }

    /// Apply command line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        precision: Option<usize>,
        json: bool,
        log_file: Option<String>,
    ) -> Self {
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if json {
            self.log_format = LogFormat::Json;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}
