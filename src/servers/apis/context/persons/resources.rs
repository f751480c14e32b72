//! API resources for the [`persons`](crate::servers::apis::context::persons) API context.
use serde::{Deserialize, Serialize};

use crate::core::contact;

/// A resource that represents a contact.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    /// The contact id. A hyphenated UUID.
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<contact::Contact> for Contact {
    fn from(contact: contact::Contact) -> Self {
        Contact {
            id: contact.id.to_string(),
            name: contact.name,
            number: contact.number,
        }
    }
}
