//! Phonebook application.
//!
//! The phonebook application has a global configuration for the whole
//! application and one service, the REST API, launched as a job.
//!
//! The application loads the configuration, opens the contact store and
//! then starts the API job. It does not wait for the job to finish, the
//! caller does.
use std::sync::Arc;

use phonebook_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::http_api;
use crate::core::Phonebook;

/// It starts all the application jobs.
///
/// # Panics
///
/// Will panic if the API server can't be started.
pub async fn start(config: &Configuration, phonebook: Arc<Phonebook>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    jobs.push(http_api::start_job(&config.http_api, phonebook).await);

    jobs
}
