//! Common responses for the API shared by all the contexts.
use std::borrow::Cow;

use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::API_LOG_TARGET;
use crate::core::error::Error;

/// Body of every error response with content.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorBody<'a> {
    pub error: Cow<'a, str>,
}

pub const MALFORMED_ID: &str = "malformatted id";
pub const UNKNOWN_ENDPOINT: &str = "unknown endpoint";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";

/// # Panics
///
/// Will panic if it can't convert the body to json
#[must_use]
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        serde_json::to_string(body).unwrap(),
    )
        .into_response()
}

// Success responses

#[must_use]
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

// Error responses

#[must_use]
pub fn error_response(status: StatusCode, message: &str) -> Response {
    json_response(
        status,
        &ErrorBody {
            error: Cow::Borrowed(message),
        },
    )
}

#[must_use]
pub fn bad_request_response(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

#[must_use]
pub fn malformed_id_response() -> Response {
    bad_request_response(MALFORMED_ID)
}

/// `400` response when the request body can't be extracted as a JSON object.
#[must_use]
pub fn invalid_json_body_response(rejection: &JsonRejection) -> Response {
    bad_request_response(&rejection.body_text())
}

/// `404` with an empty body.
#[must_use]
pub fn not_found_response() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

#[must_use]
pub fn unknown_endpoint_response() -> Response {
    error_response(StatusCode::NOT_FOUND, UNKNOWN_ENDPOINT)
}

/// `500` response. The error is logged but it's not sent to the client.
#[must_use]
pub fn unhandled_error_response<E: std::error::Error>(action: &str, e: &E) -> Response {
    tracing::error!(target: API_LOG_TARGET, "failed to {action}: {e}");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}

/// It maps an error returned by the [`Phonebook`](crate::core::Phonebook)
/// to a response.
///
/// - `400` for malformed ids and invalid fields.
/// - `500` for everything else.
#[must_use]
pub fn phonebook_error_response(action: &str, e: &Error) -> Response {
    match e {
        Error::MalformedId { .. } => malformed_id_response(),
        Error::Validation(validation_error) => bad_request_response(&validation_error.to_string()),
        Error::Database { .. } | Error::Task { .. } => unhandled_error_response(action, e),
    }
}
