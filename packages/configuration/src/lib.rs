//! Configuration data structures for the phonebook service.
//!
//! The service reads its configuration once, at startup. The sources are
//! merged in this order (later sources win):
//!
//! 1. The TOML configuration. Either the whole content of the
//!    `PHONEBOOK_CONFIG_TOML` env var or, if it is not set, the file at
//!    `PHONEBOOK_CONFIG_TOML_PATH` (or the default path given by the
//!    application). A missing file means "use the defaults".
//! 2. Env vars prefixed with `PHONEBOOK_CONFIG_OVERRIDE_`, using `__` to go
//!    down one level. For example
//!    `PHONEBOOK_CONFIG_OVERRIDE_HTTP_API__BIND_ADDRESS=0.0.0.0:8080`.
//! 3. The conventional process variables `PORT` and `DATABASE_URL`.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::num::ParseIntError;
use std::sync::Arc;

use phonebook_located_error::{DynError, LocatedError};
use thiserror::Error;

// Environment variables

/// The whole `phonebook.toml` file content. It has priority over the config file.
const ENV_VAR_CONFIG_TOML: &str = "PHONEBOOK_CONFIG_TOML";

/// The `phonebook.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "PHONEBOOK_CONFIG_TOML_PATH";

/// Prefix for the env vars that override single configuration options.
pub const CONFIG_OVERRIDE_PREFIX: &str = "PHONEBOOK_CONFIG_OVERRIDE_";

/// Path separator in the override env var names.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

/// The port the HTTP API listens on. Replaces the port of `http_api.bind_address`.
pub const ENV_VAR_PORT: &str = "PORT";

/// The contact store connection string. Replaces `database.path` and, for
/// `mysql://` URLs, `database.driver`.
pub const ENV_VAR_DATABASE_URL: &str = "DATABASE_URL";

pub type Configuration = v1::Configuration;
pub type HttpApi = v1::http_api::HttpApi;
pub type Database = v1::database::Database;
pub type Driver = v1::database::Driver;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
    port: Option<u16>,
    database_url: Option<String>,
}

impl Info {
    /// Collects the configuration sources from the process environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the `PORT` env var is set but it is not a valid port.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable `{ENV_VAR_CONFIG_TOML}` ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        let port = match env::var(ENV_VAR_PORT) {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|source| Error::InvalidPort { value, source })?,
            ),
            Err(_) => None,
        };

        let database_url = env::var(ENV_VAR_DATABASE_URL).ok();

        Ok(Self {
            config_toml,
            config_toml_path,
            port,
            database_url,
        })
    }

    /// Configuration sources given explicitly, without reading the environment.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, database_url: &str) -> Self {
        self.database_url = Some(database_url.to_owned());
        self
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The merged configuration could not be deserialized.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The `PORT` env var does not contain a port number.
    #[error("Invalid `PORT` value \"{value}\": {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
