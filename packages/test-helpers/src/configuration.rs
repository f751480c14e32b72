//! Configurations for tests.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use phonebook_configuration::{Configuration, Driver, Threshold};

use crate::random;

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one phonebook at the same time.
///
/// - The API listens on a port chosen by the operating system.
/// - The contact store is a new `SQLite3` file in the temp directory.
/// - Logging is disabled.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("phonebook_{random_db_id}.db"));

    config.database.driver = Driver::Sqlite3;
    config.database.path = temp_file.to_str().unwrap().to_owned();

    config
}

