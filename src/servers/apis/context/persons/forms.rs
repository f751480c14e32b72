use serde::{Deserialize, Serialize};

/// Body of the requests that add or update a contact.
///
/// Both fields are optional here. Missing values are reported by the contact
/// validation with the same message as empty values.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub number: Option<String>,
}
