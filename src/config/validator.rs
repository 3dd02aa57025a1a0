//! Settings validation: reject values that would only fail later at connect or bind time.

use crate::config::Settings;
use crate::error::ConfigError;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if !(settings.database_url.starts_with("postgres://") || settings.database_url.starts_with("postgresql://")) {
        return Err(ConfigError::Invalid {
            key: "DB_URL",
            value: "expected a postgres:// connection string".into(),
        });
    }
    if settings.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: settings.max_connections.to_string(),
        });
    }
    if settings.body_limit_bytes == 0 {
        return Err(ConfigError::Invalid {
            key: "BODY_LIMIT_BYTES",
            value: settings.body_limit_bytes.to_string(),
        });
    }
    Ok(())
}
