//! The `MySQL` database driver.
use std::str::FromStr;

use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder, TxOpts};
use r2d2_mysql::MySqlConnectionManager;

use super::driver::Driver;
use super::{Database, Error};
use crate::core::contact::{Contact, ContactId};

const DRIVER: Driver = Driver::MySQL;

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }
}

fn contact_from_row((contact_id, name, number): (String, String, String)) -> Result<Contact, Error> {
    let id = ContactId::from_str(&contact_id).map_err(|e| (e, DRIVER))?;

    Ok(Contact { id, name, number })
}

/// Builds the contact returned by an update from the `contact_id, name` row
/// and the number that was written.
fn updated_contact(row: Option<(String, String)>, number: &str) -> Result<Option<Contact>, Error> {
    row.map(|(contact_id, name)| contact_from_row((contact_id, name, number.to_owned())))
        .transpose()
}

impl Database for Mysql {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_contacts_table = "
        CREATE TABLE IF NOT EXISTS contacts (
            id integer PRIMARY KEY AUTO_INCREMENT,
            contact_id VARCHAR(36) NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL,
            number VARCHAR(64) NOT NULL
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_contacts_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_contacts_table = "
        DROP TABLE `contacts`;"
            .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&drop_contacts_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_contacts`](crate::core::databases::Database::load_contacts).
    fn load_contacts(&self) -> Result<Vec<Contact>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.query::<(String, String, String), _>("SELECT contact_id, name, number FROM contacts ORDER BY id")?;

        rows.into_iter().map(contact_from_row).collect()
    }

    /// Refer to [`databases::Database::count_contacts`](crate::core::databases::Database::count_contacts).
    fn count_contacts(&self) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count = conn.query_first::<u64, _>("SELECT COUNT(*) FROM contacts")?;

        Ok(count.unwrap_or_default())
    }

    /// Refer to [`databases::Database::get_contact`](crate::core::databases::Database::get_contact).
    fn get_contact(&self, id: &ContactId) -> Result<Option<Contact>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<(String, String, String), _, _>(
            "SELECT contact_id, name, number FROM contacts WHERE contact_id = :contact_id",
            params! { "contact_id" => id.to_string() },
        )?;

        select.map(contact_from_row).transpose()
    }

    /// Refer to [`databases::Database::insert_contact`](crate::core::databases::Database::insert_contact).
    fn insert_contact(&self, contact: &Contact) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let contact_id = contact.id.to_string();
        let name = &contact.name;
        let number = &contact.number;

        conn.exec_drop(
            "INSERT INTO contacts (contact_id, name, number) VALUES (:contact_id, :name, :number)",
            params! { contact_id, name, number },
        )?;

        if conn.affected_rows() == 0 {
            return Err(Error::InsertFailed {
                location: std::panic::Location::caller(),
                driver: DRIVER,
            });
        }

        Ok(())
    }

    /// Refer to [`databases::Database::update_contact_number`](crate::core::databases::Database::update_contact_number).
    ///
    /// The update and the read run in one transaction. The row stays locked
    /// until the commit, so the returned number is the one written here.
    fn update_contact_number(&self, id: &ContactId, number: &str) -> Result<Option<Contact>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let contact_id = id.to_string();

        let mut tx = conn.start_transaction(TxOpts::default())?;

        tx.exec_drop(
            "UPDATE contacts SET number = :number WHERE contact_id = :contact_id",
            params! { "number" => number, "contact_id" => &contact_id },
        )?;

        let select = tx.exec_first::<(String, String), _, _>(
            "SELECT contact_id, name FROM contacts WHERE contact_id = :contact_id",
            params! { contact_id },
        )?;

        tx.commit()?;

        updated_contact(select, number)
    }

    /// Refer to [`databases::Database::remove_contact`](crate::core::databases::Database::remove_contact).
    fn remove_contact(&self, id: &ContactId) -> Result<usize, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "DELETE FROM contacts WHERE contact_id = :contact_id",
            params! { "contact_id" => id.to_string() },
        )?;

        Ok(usize::from(conn.affected_rows() > 0))
    }
}
