//! App configuration baked in at build time.
//!
//! The client has no process environment at runtime, so settings are read
//! with `option_env!` when the wasm bundle is compiled:
//!
//! - `ASAANFORM_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
//! - `ASAANFORM_TITLE`: document title, default `AsaanForm`
//!
//! Parsing goes through [`AppConfig::from_lookup`] so it can be tested with
//! any variable source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TITLE: &str = "AsaanForm";

pub const LOG_LEVEL_VAR: &str = "ASAANFORM_LOG_LEVEL";
pub const TITLE_VAR: &str = "ASAANFORM_TITLE";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[cfg(feature = "csr")]
    pub fn as_log_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_level: LogLevel::default(), title: DEFAULT_TITLE.to_owned() }
    }
}

impl AppConfig {
    /// Config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unrecognized log level.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match var {
            LOG_LEVEL_VAR => option_env!("ASAANFORM_LOG_LEVEL"),
            TITLE_VAR => option_env!("ASAANFORM_TITLE"),
            _ => None,
        })
    }

    /// Config from an arbitrary variable source. Missing or blank values take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unrecognized log level.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let log_level = parse_log_level(lookup(LOG_LEVEL_VAR))?;
        let title = lookup(TITLE_VAR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_owned();
        Ok(Self { log_level, title })
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<LogLevel, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(LogLevel::default());
    };
    match raw.to_ascii_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        _ => Err(ConfigError::InvalidValue { var: LOG_LEVEL_VAR, value: raw.to_owned() }),
    }
}
