//! API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the phonebook REST API.
//!
//! The function spawns a new asynchronous task, that tasks is the
//! "**launcher**". The "**launcher**" starts the actual server and sends a
//! message back to the main application. The main application waits until
//! it receives the [`Started`](crate::bootstrap::jobs::Started) message from
//! the "**launcher**".
//!
//! Refer to the [configuration documentation](phonebook_configuration)
//! for the API configuration options.
use std::sync::Arc;

use phonebook_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::info;

use crate::core::Phonebook;
use crate::servers::apis::server::{ApiServer, Launcher};

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
/// The returned handle resolves when the server has been shut down.
///
/// # Panics
///
/// It would panic if the API server can't be started, for example when the
/// bind address is already in use.
pub async fn start_job(config: &HttpApi, phonebook: Arc<Phonebook>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(config.bind_address))
        .start(phonebook)
        .await
        .expect("it should be able to start the phonebook api");

    info!("API server listening on http://{}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");

        let _launcher = server
            .state
            .task
            .await
            .expect("failed to close service")
            .expect("the api server should shut down cleanly");
    })
}
