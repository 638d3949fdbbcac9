//! Observability settings read from the environment.

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LIBRIS_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Set when the environment asked for a format we do not know.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl ObservabilityConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_format_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Build settings from a raw `LIBRIS_LOG_FORMAT` value.
    pub fn from_format_value(value: Option<&str>) -> Self {
        match value.map(str::parse::<LogFormat>) {
            None => Self::default(),
            Some(Ok(format)) => Self {
                format,
                rejected_format: None,
            },
            Some(Err(err)) => Self {
                format: LogFormat::default(),
                rejected_format: Some(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_json() {
        let config = ObservabilityConfig::from_format_value(None);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.rejected_format.is_none());
    }

    #[test]
    fn format_parsing_ignores_case_and_whitespace() {
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
    }

    #[test]
    fn unknown_value_falls_back_and_is_reported() {
        let config = ObservabilityConfig::from_format_value(Some("xml"));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(
            config.rejected_format,
            Some(UnknownLogFormat("xml".to_string()))
        );
    }
}
