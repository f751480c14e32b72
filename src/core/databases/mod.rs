//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. The drivers create the
//! table when it does not exist.
//!
//! The only persistent object is the contact.
//!
//! # Contacts
//!
//!  Field        | Sample data                            | Description
//! ---|---|---
//!  `id`         | 1                                      | Autoincrement id. It defines the order of the contact list.
//!  `contact_id` | `4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10` | The [`ContactId`], unique.
//!  `name`       | `Ada Lovelace`                         | The contact name.
//!  `number`     | `040-1234567`                          | The contact phone number.
//!
//! The drivers do not validate the contacts. Validation is done by the
//! [`Phonebook`](crate::core::Phonebook) before writing.
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

#[cfg(test)]
use mockall::automock;

use self::error::Error;
use crate::core::contact::{Contact, ContactId};

/// The persistence trait. It contains all the methods to interact with the database.
#[cfg_attr(test, automock)]
pub trait Database: Sync + Send {
    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Contacts

    /// It loads all the contacts, in insertion order.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// It counts the stored contacts.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to count.
    fn count_contacts(&self) -> Result<u64, Error>;

    /// It gets a contact by its id.
    ///
    /// It returns `None` if there is no contact with that id.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_contact(&self, id: &ContactId) -> Result<Option<Contact>, Error>;

    /// It adds a new contact.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_contact(&self, contact: &Contact) -> Result<(), Error>;

    /// It replaces the number of a contact and returns the contact as it is
    /// after the update.
    ///
    /// It returns `None` if there is no contact with that id.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn update_contact_number(&self, id: &ContactId, number: &str) -> Result<Option<Contact>, Error>;

    /// It removes a contact. It returns the number of removed contacts, `0`
    /// if there was no contact with that id.
    ///
    /// # Context: Contacts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to remove.
    fn remove_contact(&self, id: &ContactId) -> Result<usize, Error>;
}
