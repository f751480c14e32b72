//! Application jobs launchers.
//!
//! The main application setup has only one main stage:
//!
//! 1. Setup the domain layer: the core phonebook.
//! 2. Launch all the application services as concurrent jobs.
//!
//! This module contains the functions to launch those jobs.
pub mod http_api;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}
