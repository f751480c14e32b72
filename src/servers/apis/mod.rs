//! The phonebook REST API.
//!
//! The API exposes the contact store over HTTP with JSON bodies. It's
//! organized in resource groups called contexts:
//!
//! - [`persons`](crate::servers::apis::context::persons): the contacts CRUD.
//! - [`info`](crate::servers::apis::context::info): a small HTML summary page.
//!
//! Any other path, or a method a path does not support, responds with:
//!
//! ```text
//! 404 {"error":"unknown endpoint"}
//! ```
//!
//! # Errors
//!
//! All client errors have a JSON body with a single `error` field:
//!
//! Status | Body | Reason
//! ---|---|---
//! `400` | `{"error":"malformatted id"}` | The `id` path param is not a well-formed contact id.
//! `400` | `{"error":"Contact validation failed: number: ..."}` | The contact fields are not valid.
//! `400` | `{"error":"Failed to parse the request body as JSON: ..."}` | The body is not a JSON object.
//! `404` | empty | The contact does not exist.
//! `500` | `{"error":"internal server error"}` | The contact store failed. The details are only logged.
//!
//! # Running the API
//!
//! The API listens on the `http_api.bind_address` socket address of the
//! configuration. For example, with the default configuration:
//!
//! ```bash
//! curl http://0.0.0.0:3001/api/persons
//! ```
//!
//! Refer to the [`server`](crate::servers::apis::server) module for how the
//! server is started and stopped.
pub mod context;
pub mod responses;
pub mod routes;
pub mod server;

use serde::Deserialize;

/// Target of the API server logs.
pub const API_LOG_TARGET: &str = "API";

/// The contact id URL path parameter.
///
/// For example: `http://localhost:3001/api/persons/{id}`.
///
/// It's the raw value collected from the URL path. It's not validated here.
/// The [`Phonebook`](crate::core::Phonebook) parses it and rejects malformed
/// ids.
#[derive(Deserialize)]
pub struct ContactIdParam(pub String);
