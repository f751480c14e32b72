//! Contacts, the phonebook entries.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

use super::validation::{self, ValidationError};

/// The identifier of a [`Contact`].
///
/// It's generated by the contact store when the contact is created and it
/// never changes. It's represented as a hyphenated UUID, for example
/// `4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ContactId(Uuid);

impl ContactId {
    /// A new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// The value is not a well-formed contact identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid contact id: \"{value}\"")]
pub struct ParseContactIdError {
    value: String,
}

impl FromStr for ContactId {
    type Err = ParseContactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ParseContactIdError { value: s.to_owned() })
    }
}

/// A phonebook entry.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    /// Builds a contact that has not been stored yet, with a new identifier.
    ///
    /// # Errors
    ///
    /// Will return a [`ValidationError`] if the name is missing or the number
    /// is missing or malformed.
    pub fn new(name: Option<&str>, number: Option<&str>) -> Result<Contact, ValidationError> {
        let (name, number) = validation::validate_new_contact(name, number)?;

        Ok(Contact {
            id: ContactId::generate(),
            name: name.to_owned(),
            number: number.to_owned(),
        })
    }
}
