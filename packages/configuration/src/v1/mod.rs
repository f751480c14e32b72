//! Version `1` of the phonebook configuration.
//!
//! This is the default configuration, the one used when no configuration
//! file is found:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [http_api]
//! bind_address = "0.0.0.0:3001"
//!
//! [database]
//! driver = "sqlite3"
//! path = "./storage/phonebook/lib/database/sqlite3.db"
//! ```
//!
//! Every field has a default value, so any subset of the options can be
//! provided.
pub mod database;
pub mod http_api;
pub mod logging;

use std::fs;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::database::Database;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the phonebook.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,

    /// The contact store configuration.
    #[serde(default)]
    pub database: Database,
}

impl Configuration {
    /// Loads the configuration from the sources collected in `info`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the merged configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = match &info.config_toml {
            Some(config_toml) => Figment::new().merge(Toml::string(config_toml)),
            None => Figment::new().merge(Toml::file(&info.config_toml_path)),
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let mut config: Configuration = figment.extract()?;

        if let Some(port) = info.port {
            config.http_api.override_port(port);
        }

        if let Some(database_url) = &info.database_url {
            config.database.override_url(database_url);
        }

        Ok(config)
    }

    /// Loads the configuration from a TOML file, applying the
    /// `PHONEBOOK_CONFIG_OVERRIDE_` env vars.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be written into the file.
    pub fn save_to_file(&self, path: &str) {
        fs::write(path, self.to_toml()).expect("Could not write to file!");
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded. It can't happen
    /// with the current data structures.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// Hides the secrets in the configuration so it can be logged.
    #[must_use]
    pub fn mask_secrets(mut self) -> Self {
        self.database.mask_secrets();
        self
    }
}
