//! Application configuration.
//!
//! Connection credentials come from an `application.properties`-style
//! key=value file; a missing file or key is fatal before anything touches
//! the database.

use std::collections::HashMap;
use std::fs;

use sqlx::postgres::PgConnectOptions;

use crate::utils::errors::{DemoError, DemoResult};

/// Where the properties file is looked up, relative to the working directory.
pub const DEFAULT_PROPERTIES_PATH: &str = "application.properties";

const KEY_DB_URL: &str = "db.url";
const KEY_DB_USERNAME: &str = "db.username";
const KEY_DB_PASSWORD: &str = "db.password";

/// Top-level configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database connection parameters.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl AppConfig {
    /// Load and validate the properties file.
    pub fn load(path: &str) -> DemoResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| DemoError::Config(format!("cannot read {}: {}", path, e)))?;
        let properties = parse_properties(&raw);

        Ok(Self {
            database: DatabaseConfig {
                url: required(&properties, KEY_DB_URL, path)?,
                username: required(&properties, KEY_DB_USERNAME, path)?,
                password: required(&properties, KEY_DB_PASSWORD, path)?,
            },
        })
    }
}

impl DatabaseConfig {
    /// Build connect options from the URL, applying the credential keys on
    /// top of whatever the URL itself carries.
    pub fn connect_options(&self) -> DemoResult<PgConnectOptions> {
        let mut options: PgConnectOptions = self
            .url
            .parse()
            .map_err(|e| DemoError::Config(format!("invalid {}: {}", KEY_DB_URL, e)))?;

        if !self.username.is_empty() {
            options = options.username(&self.username);
        }
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }

        Ok(options)
    }

    /// Test/tooling constructor for a URL that already carries credentials.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Parse `key=value` lines; blank lines and `#`/`!` comments are skipped.
fn parse_properties(raw: &str) -> HashMap<String, String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn required(properties: &HashMap<String, String>, key: &str, path: &str) -> DemoResult<String> {
    properties
        .get(key)
        .cloned()
        .ok_or_else(|| DemoError::Config(format!("missing key '{}' in {}", key, path)))
}
