//! API handlers for the [`persons`](crate::servers::apis::context::persons) API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::forms::ContactForm;
use super::resources::Contact;
use super::responses::{
    contact_list_response, contact_response, failed_to_add_contact_response, failed_to_delete_contact_response,
    failed_to_get_contact_response, failed_to_load_contacts_response, failed_to_update_contact_response,
};
use crate::core::Phonebook;
use crate::servers::apis::responses::{invalid_json_body_response, no_content_response, not_found_response};
use crate::servers::apis::ContactIdParam;

/// It handles the request to list all the contacts.
///
/// It returns:
///
/// - `200` with a json array of [`Contact`] resources.
/// - `500` if the contacts couldn't be loaded.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::context::persons#list-contacts)
/// for more information about this endpoint.
pub async fn get_contacts_handler(State(phonebook): State<Arc<Phonebook>>) -> Response {
    match phonebook.get_contacts().await {
        Ok(contacts) => contact_list_response(&contacts.into_iter().map(Contact::from).collect::<Vec<Contact>>()),
        Err(e) => failed_to_load_contacts_response(&e),
    }
}

/// It handles the request to get one contact.
///
/// It returns:
///
/// - `200` with a json [`Contact`] resource.
/// - `404` with an empty body if the contact does not exist.
/// - `400` if the id is malformed.
/// - `500` if the contact couldn't be loaded.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::context::persons#get-a-contact)
/// for more information about this endpoint.
pub async fn get_contact_handler(State(phonebook): State<Arc<Phonebook>>, Path(id): Path<ContactIdParam>) -> Response {
    match phonebook.get_contact(&id.0).await {
        Ok(Some(contact)) => contact_response(&Contact::from(contact)),
        Ok(None) => not_found_response(),
        Err(e) => failed_to_get_contact_response(&e),
    }
}

/// It handles the request to add a new contact.
///
/// It returns:
///
/// - `200` with the new json [`Contact`] resource, including its id.
/// - `400` if the body is not a json object or the fields are not valid.
/// - `500` if the contact couldn't be stored.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::context::persons#add-a-contact)
/// for more information about this endpoint.
pub async fn add_contact_handler(
    State(phonebook): State<Arc<Phonebook>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_json_body_response(&rejection),
    };

    match phonebook.add_contact(form.name.as_deref(), form.number.as_deref()).await {
        Ok(contact) => contact_response(&Contact::from(contact)),
        Err(e) => failed_to_add_contact_response(&e),
    }
}

/// It handles the request to replace the number of a contact.
///
/// It returns:
///
/// - `200` with the updated json [`Contact`] resource.
/// - `404` with an empty body if the contact does not exist.
/// - `400` if the id is malformed, the body is not a json object or the new
///   number is not valid.
/// - `500` if the contact couldn't be updated.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::context::persons#update-the-number-of-a-contact)
/// for more information about this endpoint.
pub async fn update_contact_handler(
    State(phonebook): State<Arc<Phonebook>>,
    Path(id): Path<ContactIdParam>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let Json(form) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_json_body_response(&rejection),
    };

    match phonebook.update_contact_number(&id.0, form.number.as_deref()).await {
        Ok(Some(contact)) => contact_response(&Contact::from(contact)),
        Ok(None) => not_found_response(),
        Err(e) => failed_to_update_contact_response(&e),
    }
}

/// It handles the request to delete a contact.
///
/// It returns:
///
/// - `204` with an empty body, whether the contact existed or not.
/// - `400` if the id is malformed.
/// - `500` if the contact couldn't be removed.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::context::persons#delete-a-contact)
/// for more information about this endpoint.
pub async fn delete_contact_handler(State(phonebook): State<Arc<Phonebook>>, Path(id): Path<ContactIdParam>) -> Response {
    match phonebook.remove_contact(&id.0).await {
        Ok(()) => no_content_response(),
        Err(e) => failed_to_delete_contact_response(&e),
    }
}
