use std::sync::Arc;

use phonebook::core::Phonebook;
use phonebook::servers::apis::server;

pub mod asserts;
pub mod client;
pub mod connection_info;
pub mod contract;
pub mod environment;

pub type Started = environment::Environment<server::Running>;

/// It forces a database error by dropping all tables.
/// That makes any query fail.
pub fn force_database_error(phonebook: &Arc<Phonebook>) {
    phonebook.drop_database_tables().unwrap();
}
