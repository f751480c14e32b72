//! Errors returned by the [`Phonebook`](crate::core::Phonebook).
//!
//! Error | Description
//! ---|---
//! `MalformedId` | The supplied id is not a well-formed [`ContactId`](crate::core::contact::ContactId).
//! `Validation` | The contact fields do not satisfy the [validation](crate::core::validation) rules.
//! `Database` | The database driver failed.
//! `Task` | The blocking task running the query did not finish.
use crate::core::contact::ParseContactIdError;
use crate::core::databases;
use crate::core::validation::ValidationError;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("malformatted id: {source}")]
    MalformedId {
        #[from]
        source: ParseContactIdError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("contact store failure: {source}")]
    Database {
        #[from]
        source: databases::error::Error,
    },

    #[error("contact store task failed: {reason}")]
    Task { reason: String },
}
