//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled.
//!
//! - `MARKTRACKER_API_BASE`: REST API root, default `http://localhost:5000/api`
//! - `MARKTRACKER_LOG_LEVEL`: `error`..`trace`, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Returns the config alongside any value that had to be replaced by its
    /// default, so the caller can report it once logging is up.
    pub fn from_build_env() -> (Self, Option<ConfigError>) {
        Self::from_values(option_env!("MARKTRACKER_API_BASE"), option_env!("MARKTRACKER_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> (Self, Option<ConfigError>) {
        let api_base = normalize_api_base(api_base.unwrap_or(DEFAULT_API_BASE));
        let (log_level, err) = match parse_log_level(log_level) {
            Ok(level) => (level, None),
            Err(e) => (DEFAULT_LOG_LEVEL, Some(e)),
        };
        (Self { api_base, log_level }, err)
    }
}

/// Trim whitespace and trailing slashes; an empty value falls back to the
/// default.
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Parse a log level name, case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogLevel`] for unrecognized names.
pub fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
