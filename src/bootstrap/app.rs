//! Setup for the main phonebook application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does is
//! starting the API server job.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize logging.
//! 3. Initialize the domain phonebook, which opens the contact store.
use std::sync::Arc;

use phonebook_configuration::Configuration;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::phonebook_factory;
use crate::core::Phonebook;

/// It loads the configuration from the environment and builds the main domain [`Phonebook`] struct.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Phonebook>) {
    let configuration = Arc::new(initialize_configuration());
    let phonebook = initialize_with_configuration(&configuration);

    (configuration, phonebook)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Phonebook> {
    initialize_logging(configuration);

    info!("Configuration:\n{}", configuration.as_ref().clone().mask_secrets().to_toml());

    Arc::new(initialize_phonebook(configuration))
}

/// It builds the domain phonebook
///
/// The phonebook is the domain layer service. It's the entrypoint to the
/// contact store from the delivery layer.
///
/// # Panics
///
/// Will panic if the contact store can't be opened.
#[must_use]
pub fn initialize_phonebook(config: &Arc<Configuration>) -> Phonebook {
    phonebook_factory(config)
}

/// It initializes the log threshold.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
