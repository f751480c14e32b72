//! The core `phonebook` module contains the contact store logic which is
//! independent of the delivery layer.
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!   HTTP API |> Phonebook |> Database driver (SQLite3 or MySQL)
//! ```
//!
//! # Phonebook
//!
//! The [`Phonebook`] is the main struct in this module. It's the client of the
//! contact store and it's the only way the delivery layer reads or writes
//! contacts. It has three responsibilities:
//!
//! - Parsing the contact identifiers received from the outside. Malformed ids
//!   are rejected with [`Error::MalformedId`].
//! - Validating the contact fields before every write. Invalid fields are
//!   rejected with [`Error::Validation`]. Refer to the [`validation`] module
//!   for the rules.
//! - Running the queries on the [`Database`](crate::core::databases::Database)
//!   driver. Drivers are blocking, so every query runs on the Tokio blocking
//!   thread pool.
//!
//! Not finding a contact is not an error: the operations return `Ok(None)`.
//!
//! ```rust,no_run
//! use phonebook::core::Phonebook;
//! use phonebook_configuration::Configuration;
//!
//! # async fn example() {
//! let config = Configuration::default();
//!
//! let phonebook = Phonebook::new(&config.database).expect("the database should be reachable");
//!
//! let contact = phonebook
//!     .add_contact(Some("Ada Lovelace"), Some("040-1234567"))
//!     .await
//!     .expect("the contact should be valid");
//!
//! let found = phonebook.get_contact(&contact.id.to_string()).await;
//! # }
//! ```
//!
//! # Persistence
//!
//! Refer to the [`databases`] module.
pub mod contact;
pub mod databases;
pub mod error;
pub mod services;
pub mod validation;

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use self::contact::{Contact, ContactId};
use self::databases::Database;
use self::error::Error;

/// The contact store client.
///
/// It's shared by all the request handlers. Cloning the inner database handle
/// is cheap, the driver owns a connection pool.
pub struct Phonebook {
    database: Arc<Box<dyn Database>>,
}

/// What the info page shows.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    /// Number of stored contacts.
    pub contacts: u64,
    /// When the summary was taken.
    pub generated_at: DateTime<Utc>,
}

impl Phonebook {
    /// `Phonebook` constructor. It builds the database driver selected in the
    /// configuration and creates the tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to connect to database.
    pub fn new(config: &phonebook_configuration::Database) -> Result<Phonebook, databases::error::Error> {
        let database = databases::driver::build(&config.driver, &config.path)?;

        Ok(Phonebook::with_database(Arc::new(database)))
    }

    /// It wraps an already built database driver.
    #[must_use]
    pub fn with_database(database: Arc<Box<dyn Database>>) -> Phonebook {
        Phonebook { database }
    }

    /// It returns all the contacts in the store order.
    ///
    /// # Errors
    ///
    /// Will return an error if the contacts can't be loaded.
    pub async fn get_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.run(|database| database.load_contacts()).await
    }

    /// It returns the number of stored contacts.
    ///
    /// # Errors
    ///
    /// Will return an error if the contacts can't be counted.
    pub async fn count_contacts(&self) -> Result<u64, Error> {
        self.run(|database| database.count_contacts()).await
    }

    /// It returns the number of stored contacts and the current time.
    ///
    /// # Errors
    ///
    /// Will return an error if the contacts can't be counted. A failure is
    /// never reported as an empty phonebook.
    pub async fn summary(&self) -> Result<Summary, Error> {
        let contacts = self.count_contacts().await?;

        Ok(Summary {
            contacts,
            generated_at: Utc::now(),
        })
    }

    /// It returns the contact with the given id, or `None` if there is no
    /// such contact.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedId` if the id is not well-formed, or an
    /// error if the contact can't be loaded.
    pub async fn get_contact(&self, id: &str) -> Result<Option<Contact>, Error> {
        let id = ContactId::from_str(id)?;

        self.run(move |database| database.get_contact(&id)).await
    }

    /// It removes the contact with the given id. Removing a contact that does
    /// not exist succeeds.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedId` if the id is not well-formed, or an
    /// error if the contact can't be removed.
    pub async fn remove_contact(&self, id: &str) -> Result<(), Error> {
        let id = ContactId::from_str(id)?;

        let removed = self.run(move |database| database.remove_contact(&id)).await?;

        tracing::debug!(target: "PHONEBOOK", "removed {removed} contact(s) with id {id}");

        Ok(())
    }

    /// It replaces the number of a contact and returns the contact as it is
    /// after the update, or `None` if there is no such contact.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedId` if the id is not well-formed,
    /// `Error::Validation` if the new number is not valid, or an error if the
    /// contact can't be updated.
    pub async fn update_contact_number(&self, id: &str, number: Option<&str>) -> Result<Option<Contact>, Error> {
        let id = ContactId::from_str(id)?;
        let number = validation::validate_number_update(number)?.to_owned();

        self.run(move |database| database.update_contact_number(&id, &number)).await
    }

    /// It stores a new contact and returns it with its generated id.
    ///
    /// Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Will return `Error::Validation` if the fields are not valid, or an
    /// error if the contact can't be stored.
    pub async fn add_contact(&self, name: Option<&str>, number: Option<&str>) -> Result<Contact, Error> {
        let contact = Contact::new(name, number)?;

        let stored = contact.clone();

        self.run(move |database| database.insert_contact(&stored)).await?;

        Ok(contact)
    }

    /// It creates the database tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to create the tables.
    pub fn create_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.create_database_tables()
    }

    /// It drops the database tables.
    ///
    /// # Errors
    ///
    /// Will return a `databases::error::Error` if unable to drop the tables.
    pub fn drop_database_tables(&self) -> Result<(), databases::error::Error> {
        self.database.drop_database_tables()
    }

    async fn run<T, F>(&self, query: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&dyn Database) -> Result<T, databases::error::Error> + Send + 'static,
    {
        let database = self.database.clone();

        let result = tokio::task::spawn_blocking(move || query(&**database))
            .await
            .map_err(|e| Error::Task { reason: e.to_string() })?;

        Ok(result?)
    }
}
