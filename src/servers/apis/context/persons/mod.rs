//! Persons API context. The contacts CRUD.
//!
//! # Endpoints
//!
//! - [List contacts](#list-contacts)
//! - [Get a contact](#get-a-contact)
//! - [Add a contact](#add-a-contact)
//! - [Update the number of a contact](#update-the-number-of-a-contact)
//! - [Delete a contact](#delete-a-contact)
//!
//! # List contacts
//!
//! `GET /api/persons`
//!
//! It returns all the contacts, in the order they were added.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/api/persons"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id": "4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10",
//!         "name": "Ada Lovelace",
//!         "number": "040-1234567"
//!     }
//! ]
//! ```
//!
//! # Get a contact
//!
//! `GET /api/persons/:id`
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `id` | UUID | The contact id. | Yes | `4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/api/persons/4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "id": "4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10",
//!     "name": "Ada Lovelace",
//!     "number": "040-1234567"
//! }
//! ```
//!
//! It responds `404` with an empty body if the contact does not exist and
//! `400` with `{"error":"malformatted id"}` if the id is not well-formed.
//!
//! # Add a contact
//!
//! `POST /api/persons`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:3001/api/persons" \
//!      -H "Content-Type: application/json" \
//!      -d '{"name":"Ada Lovelace","number":"040-1234567"}'
//! ```
//!
//! **Example response** `200`
//!
//! The new contact, with the generated `id`.
//!
//! If a field is missing or not valid it responds `400` with the validation
//! message:
//!
//! ```json
//! {
//!     "error": "Contact validation failed: number: `12-34-5678` is not a valid phone number!"
//! }
//! ```
//!
//! # Update the number of a contact
//!
//! `PUT /api/persons/:id`
//!
//! Only the `number` is updated. The `name` in the body is ignored.
//!
//! **Example request**
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:3001/api/persons/4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10" \
//!      -H "Content-Type: application/json" \
//!      -d '{"name":"Ada Lovelace","number":"09-7654321"}'
//! ```
//!
//! **Example response** `200`
//!
//! The contact with the new number. It responds `404` with an empty body if
//! the contact does not exist.
//!
//! # Delete a contact
//!
//! `DELETE /api/persons/:id`
//!
//! It responds `204` with an empty body, also when the contact did not exist.
//!
//! ```bash
//! curl -X DELETE "http://127.0.0.1:3001/api/persons/4f4cbb4a-3c9e-4d24-9d8b-0d6f7a1f2e10"
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Contact`](crate::servers::apis::context::persons::resources::Contact)
//! resource for more information about the response attributes.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
