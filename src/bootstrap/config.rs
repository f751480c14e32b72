//! Initialize configuration from file or env var.
//!
//! Refer to the [configuration crate documentation](phonebook_configuration)
//! for the list of environment variables.
use phonebook_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/phonebook.development.sqlite3.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `phonebook.toml`.
/// 2. Environment variable: `PHONEBOOK_CONFIG_TOML`. The variable contains the same contents as the `phonebook.toml` file.
///
/// Environment variable has priority over the config file. The `PORT` and
/// `DATABASE_URL` variables override the values from both.
///
/// # Panics
///
/// Will panic if it can't load the configuration, for example when the
/// `PORT` env var is not a port number.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("the configuration sources should be valid");

    Configuration::load(&info).expect("the configuration should be valid")
}
