//! API responses for the [`persons`](crate::servers::apis::context::persons) API context.
use axum::http::StatusCode;
use axum::response::Response;

use super::resources::Contact;
use crate::core::error::Error;
use crate::servers::apis::responses::{json_response, phonebook_error_response};

/// `200` response that contains an array of `Contact` resources as json.
#[must_use]
pub fn contact_list_response(contacts: &[Contact]) -> Response {
    json_response(StatusCode::OK, contacts)
}

/// `200` response that contains the `Contact` resource as json.
#[must_use]
pub fn contact_response(contact: &Contact) -> Response {
    json_response(StatusCode::OK, contact)
}

// Error responses

#[must_use]
pub fn failed_to_load_contacts_response(e: &Error) -> Response {
    phonebook_error_response("load contacts", e)
}

#[must_use]
pub fn failed_to_get_contact_response(e: &Error) -> Response {
    phonebook_error_response("get contact", e)
}

#[must_use]
pub fn failed_to_add_contact_response(e: &Error) -> Response {
    phonebook_error_response("add contact", e)
}

#[must_use]
pub fn failed_to_update_contact_response(e: &Error) -> Response {
    phonebook_error_response("update contact", e)
}

#[must_use]
pub fn failed_to_delete_contact_response(e: &Error) -> Response {
    phonebook_error_response("delete contact", e)
}
