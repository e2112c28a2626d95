use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Without `DATABASE_URL` the service runs on in-memory stores.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub store_timeout: Duration,
    pub analytics_subject: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            store_timeout: Duration::from_millis(parse_env("STORE_TIMEOUT_MS", 2000)?),
            analytics_subject: optional_env("ANALYTICS_SUBJECT")
                .unwrap_or_else(|| "resume".to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            db_max_connections: 10,
            store_timeout: Duration::from_millis(2000),
            analytics_subject: "resume".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let v: u16 = parse_env("PORTFOLIO_TEST_UNSET_VARIABLE", 8080).unwrap();
        assert_eq!(v, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PORTFOLIO_TEST_BAD_PORT", "eighty");
        let r: Result<u16> = parse_env("PORTFOLIO_TEST_BAD_PORT", 8080);
        assert!(r.is_err());
        std::env::remove_var("PORTFOLIO_TEST_BAD_PORT");
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("PORTFOLIO_TEST_TIMEOUT_MS", " 150 ");
        let v: u64 = parse_env("PORTFOLIO_TEST_TIMEOUT_MS", 2000).unwrap();
        assert_eq!(v, 150);
        std::env::remove_var("PORTFOLIO_TEST_TIMEOUT_MS");
    }

    #[test]
    fn test_blank_optional_env_is_none() {
        std::env::set_var("PORTFOLIO_TEST_BLANK", "   ");
        assert!(optional_env("PORTFOLIO_TEST_BLANK").is_none());
        std::env::remove_var("PORTFOLIO_TEST_BLANK");
    }
}
