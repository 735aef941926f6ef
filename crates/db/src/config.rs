use std::fmt;
use std::str::FromStr;

use memo_core::config::{env_opt, parse_or, ConfigError};
use sqlx::postgres::PgConnectOptions;

/// Database connection settings loaded from environment variables.
///
/// `DATABASE_URL` wins when present. Otherwise the connection is assembled
/// from the individual variables below.
///
/// | Env Var              | Default      |
/// |----------------------|--------------|
/// | `DB_HOST`            | `127.0.0.1`  |
/// | `DB_PORT`            | `5432`       |
/// | `DB_NAME`            | `memo_app`   |
/// | `DB_USER` / `DBUSER` | (none)       |
/// | `DB_PASSWORD` / `DBPASS` | (none)   |
/// | `DB_MAX_CONNECTIONS` | `10`         |
#[derive(Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_opt)
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: lookup("DATABASE_URL"),
            host: lookup("DB_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: parse_or("DB_PORT", lookup("DB_PORT"), 5432)?,
            database: lookup("DB_NAME").unwrap_or_else(|| "memo_app".into()),
            username: lookup("DB_USER").or_else(|| lookup("DBUSER")),
            password: lookup("DB_PASSWORD").or_else(|| lookup("DBPASS")),
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), 10)?,
        })
    }

    /// Connection options for the pool. Fails only on a malformed URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database);
        if let Some(username) = &self.username {
            options = options.username(username);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

// Credentials stay out of logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
