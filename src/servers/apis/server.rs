//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Binding the socket. Port `0` lets the operating system choose a free port.
//! - Reporting the bound address back with a [`Started`] message.
//! - Serving the API until a halt message or a global shutdown signal
//!   arrives, and then shutting down gracefully.
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::{Constructor, Display};
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::info;

use super::routes::router;
use super::API_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::core::Phonebook;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors starting or stopping the API server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to bind to socket {addr}: {err}")]
    UnableToBindToSocket { addr: SocketAddr, err: std::io::Error },

    #[error("unable to get the local address of the socket: {err}")]
    UnableToGetLocalAddress { err: std::io::Error },

    #[error("unable to send the started message, the receiver was dropped")]
    UnableToSendStartedMessage,

    #[error("unable to serve the API: {err}")]
    UnableToServe { err: std::io::Error },

    #[error("unable to send the halt message, the server is not running")]
    UnableToSendHaltingMessage,

    #[error("the server task did not finish: {reason}")]
    TaskFailed { reason: String },

    #[error("the server stopped before reporting its address")]
    NotStarted,
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// An API server controller.
///
/// It's a state machine. The launcher (and so the bind address) can't be
/// changed, the server can only be started and stopped.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Result<Launcher, Error>>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `ApiServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the launcher can't bind the socket or the
    /// server stops before reporting its address.
    pub async fn start(self, phonebook: Arc<Phonebook>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            launcher.start(phonebook, tx_start, rx_halt).await?;

            Ok::<Launcher, Error>(launcher)
        });

        let Ok(started) = rx_start.await else {
            return Err(match task.await {
                Ok(Err(err)) => err,
                Ok(Ok(_)) => Error::NotStarted,
                Err(err) => Error::TaskFailed { reason: err.to_string() },
            });
        };

        tracing::trace!(target: API_LOG_TARGET, binding = %started.address, "ApiServer<Stopped>::start (running)");

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns a `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the halt channel was closed or the server
    /// task failed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage)?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|e| Error::TaskFailed { reason: e.to_string() })??;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Copy, Clone, Debug, Display)]
#[display("intended_address: {bind_to}")]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// It sends the bound address on `tx_start` once the socket is bound and
    /// then serves until the server is shut down.
    ///
    /// # Errors
    ///
    /// Will return an error if the socket can't be bound or the server fails.
    pub async fn start(&self, phonebook: Arc<Phonebook>, tx_start: Sender<Started>, rx_halt: Receiver<Halted>) -> Result<(), Error> {
        let listener = std::net::TcpListener::bind(self.bind_to).map_err(|err| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err,
        })?;

        let address = listener
            .local_addr()
            .map_err(|err| Error::UnableToGetLocalAddress { err })?;

        let router = router(phonebook);

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let running = axum_server::from_tcp(listener).handle(handle).serve(router.into_make_service());

        info!(target: API_LOG_TARGET, "Starting on: http://{address}");

        tx_start
            .send(Started { address })
            .map_err(|_| Error::UnableToSendStartedMessage)?;

        running.await.map_err(|err| Error::UnableToServe { err })?;

        info!(target: API_LOG_TARGET, "Stopped server running on: http://{address}");

        Ok(())
    }
}
