//! API responses for the [`info`](crate::servers::apis::context::info) API context.
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use chrono_tz::Europe::Helsinki;

use crate::core::error::Error;
use crate::core::Summary;
use crate::servers::apis::responses::phonebook_error_response;

/// Full date and time style, for example `Monday 15 January 2024 at 12:00:00 EET`.
const TIMESTAMP_FORMAT: &str = "%A %-d %B %Y at %H:%M:%S %Z";

/// `200` response with the info HTML fragment.
#[must_use]
pub fn info_response(summary: &Summary) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        info_page(summary),
    )
        .into_response()
}

#[must_use]
pub fn failed_to_get_info_response(e: &Error) -> Response {
    phonebook_error_response("count contacts", e)
}

#[must_use]
pub fn info_page(summary: &Summary) -> String {
    format!(
        "Phonebook has info for {} people <p></p> {}",
        summary.contacts,
        helsinki_timestamp(&summary.generated_at)
    )
}

/// The time in the `Europe/Helsinki` time zone.
#[must_use]
pub fn helsinki_timestamp(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Helsinki).format(TIMESTAMP_FORMAT).to_string()
}
