use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL requests to `/api/...` are resolved against.
    pub api_url: String,
    /// Endpoint of the realtime backend's collections.
    pub realtime_url: String,
    pub http_timeout: Duration,
    pub notification_capacity: usize,
    pub search_debounce: Duration,
    /// Serialized current-user record, if someone is signed in.
    pub current_user: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading keys through `lookup` instead of the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("ACTIVATION_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("ACTIVATION_API_URL"))?
            .trim_end_matches('/')
            .to_string();

        let realtime_url = lookup("ACTIVATION_REALTIME_URL")
            .unwrap_or_else(|| format!("{api_url}/realtime"));

        Ok(Self {
            realtime_url,
            http_timeout: Duration::from_secs(parse_or(
                &lookup,
                "ACTIVATION_HTTP_TIMEOUT_SECS",
                30,
            )?),
            notification_capacity: parse_or(&lookup, "ACTIVATION_NOTIFICATION_CAPACITY", 64)?,
            search_debounce: Duration::from_millis(parse_or(
                &lookup,
                "ACTIVATION_SEARCH_DEBOUNCE_MS",
                300,
            )?),
            current_user: lookup("ACTIVATION_CURRENT_USER"),
            api_url,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_api_url_only() {
        let config =
            Config::from_lookup(lookup_from(&[("ACTIVATION_API_URL", "https://api.example.com/")]))
                .unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.realtime_url, "https://api.example.com/realtime");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.notification_capacity, 64);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.current_user, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACTIVATION_API_URL", "http://localhost:3000"),
            ("ACTIVATION_REALTIME_URL", "http://localhost:9000/db"),
            ("ACTIVATION_HTTP_TIMEOUT_SECS", "5"),
            ("ACTIVATION_NOTIFICATION_CAPACITY", "8"),
            ("ACTIVATION_SEARCH_DEBOUNCE_MS", "150"),
            ("ACTIVATION_CURRENT_USER", r#"{"id":1}"#),
        ]))
        .unwrap();

        assert_eq!(config.realtime_url, "http://localhost:9000/db");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.notification_capacity, 8);
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert_eq!(config.current_user.as_deref(), Some(r#"{"id":1}"#));
    }

    #[test]
    fn test_missing_api_url() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("ACTIVATION_API_URL"))
        );
    }

    #[test]
    fn test_invalid_number() {
        let result = Config::from_lookup(lookup_from(&[
            ("ACTIVATION_API_URL", "http://localhost:3000"),
            ("ACTIVATION_HTTP_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: "ACTIVATION_HTTP_TIMEOUT_SECS",
                value: "soon".to_string(),
            })
        );
    }
}
