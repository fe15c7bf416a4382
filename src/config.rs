use crate::domain::BorrowLimit;
use std::env;
use thiserror::Error;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number (got {value:?})")]
    InvalidNumber { name: &'static str, value: String },
}

/// アプリケーション設定
///
/// 環境変数から読み込む。`DATABASE_URL`が未設定の場合はインメモリのストアで起動する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub port: u16,
    pub borrow_limit: BorrowLimit,
}

impl Config {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            port: parse_or(&lookup, "PORT", 3000)?,
            borrow_limit: BorrowLimit::new(parse_or(
                &lookup,
                "MAX_BOOKS_PER_USER",
                BorrowLimit::DEFAULT.value(),
            )?),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.port, 3000);
        assert_eq!(config.borrow_limit, BorrowLimit::new(3));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/library"),
            ("PORT", "8080"),
            ("MAX_BOOKS_PER_USER", "5"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/library")
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.borrow_limit.value(), 5);
    }

    #[test]
    fn test_empty_database_url_means_in_memory() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "")])).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[rstest]
    #[case("PORT", "not-a-port")]
    #[case("PORT", "70000")]
    #[case("MAX_BOOKS_PER_USER", "-1")]
    #[case("DATABASE_MAX_CONNECTIONS", "many")]
    fn test_invalid_numbers(#[case] name: &'static str, #[case] value: &str) {
        let result = Config::from_lookup(lookup_from(&[(name, value)]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                name,
                value: value.to_string()
            })
        );
    }
}
