//! Load runtime settings from the environment (and a local `.env`, if present).

use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    /// PostgreSQL connection string, from `DB_URL` (or `DATABASE_URL`).
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Read settings from process env after loading `.env`. Only the connection string is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Used by `from_env` and tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DB_URL"))?;

        let listen_raw = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr: SocketAddr = listen_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "LISTEN_ADDR",
            value: listen_raw.clone(),
        })?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: v.clone(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "BODY_LIMIT_BYTES",
                value: v.clone(),
            })?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };

        let settings = Settings {
            database_url,
            listen_addr,
            max_connections,
            body_limit_bytes,
        };
        validate(&settings)?;
        Ok(settings)
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let s = Settings::from_lookup(lookup_from(&[("DB_URL", "postgres://localhost/atlas")])).unwrap();
        assert_eq!(s.database_url, "postgres://localhost/atlas");
        assert_eq!(s.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }

    #[test]
    fn database_url_falls_back() {
        let s = Settings::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/other")])).unwrap();
        assert_eq!(s.database_url, "postgres://db/other");
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_URL")));
    }

    #[test]
    fn bad_listen_addr_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://localhost/atlas"),
            ("LISTEN_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LISTEN_ADDR", .. }));
    }
}
