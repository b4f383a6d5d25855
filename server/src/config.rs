//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://alchats.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Directory holding the built webui bundle (`index.html`, wasm, css).
    pub webui_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `DATABASE_URL`: default `sqlite://alchats.db`
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `WEBUI_DIR`: default `webui/dist` next to this crate
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            port: parse_port(var("PORT").as_deref())?,
            db_max_connections: parse_max_connections(var("DB_MAX_CONNECTIONS").as_deref())?,
            webui_dir: var("WEBUI_DIR").map_or_else(default_webui_dir, PathBuf::from),
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn default_webui_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../webui/dist")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::Invalid { var: "PORT", value: raw.to_owned(), expected: "TCP port" })
}

fn parse_max_connections(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DB_MAX_CONNECTIONS);
    };
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ConfigError::Invalid {
            var: "DB_MAX_CONNECTIONS",
            value: raw.to_owned(),
            expected: "positive integer",
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
