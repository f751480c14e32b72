//! API handlers for the [`info`](crate::servers::apis::context::info) API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;

use super::responses::{failed_to_get_info_response, info_response};
use crate::core::Phonebook;

/// It handles the request for the phonebook info page.
///
/// It returns:
///
/// - `200` with the HTML fragment.
/// - `500` if the contacts couldn't be counted.
pub async fn get_info_handler(State(phonebook): State<Arc<Phonebook>>) -> Response {
    match phonebook.summary().await {
        Ok(summary) => info_response(&summary),
        Err(e) => failed_to_get_info_response(&e),
    }
}
