//! Environment-driven runtime configuration.

use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};

pub const DEFAULT_LOG_FILTER: &str = "bidintel=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing` filter directive.
    pub log_filter: String,
    pub log_json: bool,
    /// Pin "now" for timeline rules. `None` uses the system clock.
    pub as_of: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            as_of: None,
        }
    }
}

impl Config {
    /// Read `BIDINTEL_LOG`, `BIDINTEL_LOG_JSON` and `BIDINTEL_AS_OF`.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("BIDINTEL_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_json = match lookup("BIDINTEL_LOG_JSON").as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => parse_bool(v).ok_or_else(|| {
                DomainError::Config(format!("BIDINTEL_LOG_JSON must be a boolean, got {v}"))
            })?,
        };

        let as_of = match lookup("BIDINTEL_AS_OF") {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(parse_timestamp(&s).map_err(|e| {
                DomainError::Config(format!("BIDINTEL_AS_OF: {e}"))
            })?),
        };

        Ok(Self {
            log_filter,
            log_json,
            as_of,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    Err(format!("Invalid date format: {s}. Use YYYY-MM-DD or RFC3339"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIDINTEL_LOG", "bidintel=debug"),
            ("BIDINTEL_LOG_JSON", "true"),
            ("BIDINTEL_AS_OF", "2026-03-01"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "bidintel=debug");
        assert!(config.log_json);
        assert_eq!(
            config.as_of.unwrap().to_rfc3339(),
            "2026-03-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_invalid_as_of_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("BIDINTEL_AS_OF", "next tuesday")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_invalid_bool_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("BIDINTEL_LOG_JSON", "maybe")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_parse_timestamp_rfc3339_with_offset() {
        let dt = parse_timestamp("2026-03-01T10:00:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-01T08:00:00+00:00");
    }
}
