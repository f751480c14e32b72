//! The `SQLite3` database driver.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use r2d2::Pool;
use r2d2_sqlite::rusqlite::types::Type;
use r2d2_sqlite::rusqlite::{self, params, OptionalExtension, Row};
use r2d2_sqlite::SqliteConnectionManager;

use super::driver::Driver;
use super::{Database, Error};
use crate::core::contact::{Contact, ContactId};

const DRIVER: Driver = Driver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// The parent directory of the database file is created if it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    pub fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| (e, DRIVER))?;
            }
        }

        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }
}

/// Maps a `contact_id, name, number` row.
fn contact_from_row(row: &Row<'_>) -> Result<Contact, rusqlite::Error> {
    let contact_id: String = row.get(0)?;

    let id = ContactId::from_str(&contact_id).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    Ok(Contact {
        id,
        name: row.get(1)?,
        number: row.get(2)?,
    })
}

/// `COUNT(*)` comes back as a signed integer. Negative values are rejected.
fn count_from_column(count: i64) -> Result<u64, rusqlite::Error> {
    u64::try_from(count).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, count))
}

impl Database for Sqlite {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_contacts_table = "
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            contact_id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            number TEXT NOT NULL
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_contacts_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_contacts_table = "
        DROP TABLE contacts;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_contacts_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_contacts`](crate::core::databases::Database::load_contacts).
    fn load_contacts(&self) -> Result<Vec<Contact>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT contact_id, name, number FROM contacts ORDER BY id")?;

        let contacts = stmt
            .query_map([], contact_from_row)?
            .collect::<Result<Vec<Contact>, rusqlite::Error>>()?;

        Ok(contacts)
    }

    /// Refer to [`databases::Database::count_contacts`](crate::core::databases::Database::count_contacts).
    fn count_contacts(&self) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;

        Ok(count_from_column(count)?)
    }

    /// Refer to [`databases::Database::get_contact`](crate::core::databases::Database::get_contact).
    fn get_contact(&self, id: &ContactId) -> Result<Option<Contact>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let contact = conn
            .query_row(
                "SELECT contact_id, name, number FROM contacts WHERE contact_id = ?1",
                [id.to_string()],
                contact_from_row,
            )
            .optional()?;

        Ok(contact)
    }

    /// Refer to [`databases::Database::insert_contact`](crate::core::databases::Database::insert_contact).
    fn insert_contact(&self, contact: &Contact) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO contacts (contact_id, name, number) VALUES (?1, ?2, ?3)",
            params![contact.id.to_string(), contact.name, contact.number],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: std::panic::Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(())
        }
    }

    /// Refer to [`databases::Database::update_contact_number`](crate::core::databases::Database::update_contact_number).
    fn update_contact_number(&self, id: &ContactId, number: &str) -> Result<Option<Contact>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let contact = conn
            .query_row(
                "UPDATE contacts SET number = ?1 WHERE contact_id = ?2 RETURNING contact_id, name, number",
                params![number, id.to_string()],
                contact_from_row,
            )
            .optional()?;

        Ok(contact)
    }

    /// Refer to [`databases::Database::remove_contact`](crate::core::databases::Database::remove_contact).
    fn remove_contact(&self, id: &ContactId) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let deleted = conn.execute("DELETE FROM contacts WHERE contact_id = ?1", [id.to_string()])?;

        Ok(deleted)
    }
}
