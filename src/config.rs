//! Process configuration loaded once from the environment.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::collections::HashMap;
use std::str::FromStr;

/// Connection parameters for the backing database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub name: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Wire-level behavior of the HTTP layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApiSettings {
    /// Every error is answered with 400 and the delete body keeps the key `professor deleteed`.
    pub wire_compat: bool,
    /// Update/delete that touch no row answer with the not-found error instead of success.
    pub report_missing_rows: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server_port: u16,
    pub api: ApiSettings,
}

impl Config {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database = DatabaseConfig {
            user: required("DATABASE_USER")?,
            name: required("DATABASE_NAME")?,
            password: required("DATABASE_PASSWORD")?,
            host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&lookup, "DATABASE_PORT", 5432)?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
        };
        let server_port = parse_value("SERVER_PORT", &required("SERVER_PORT")?)?;
        let api = ApiSettings {
            wire_compat: parse_bool(&lookup, "PROFESSOR_WIRE_COMPAT")?,
            report_missing_rows: parse_bool(&lookup, "PROFESSOR_REPORT_MISSING")?,
        };

        Ok(Config {
            database,
            server_port,
            api,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

fn parse_value<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, var: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(false),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "" | "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { var, value: raw }),
        },
    }
}
