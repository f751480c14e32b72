//! API routes.
//!
//! It loads the routes of all the API contexts and adds the common middleware
//! to them:
//!
//! - Permissive CORS.
//! - A `x-request-id` header with a new UUID for every request, also copied
//!   to the response.
//! - Request and response tracing.
//!
//! The contacts routes have the `/api` prefix. For example: `/api/persons`.
//! The info page is served at `/info`.
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;
use axum::Router;
use hyper::Request;
use tower_http::cors::CorsLayer;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};
use uuid::Uuid;

use super::context::{info, persons};
use super::responses::unknown_endpoint_response;
use super::API_LOG_TARGET;
use crate::core::Phonebook;

/// Add all API routes to the router.
#[allow(clippy::needless_pass_by_value)]
pub fn router(phonebook: Arc<Phonebook>) -> Router {
    let router = Router::new();

    let api_url_prefix = "/api";

    let router = persons::routes::add(api_url_prefix, router, phonebook.clone());
    let router = info::routes::add("", router, phonebook);

    router
        .fallback(unknown_endpoint_handler)
        .layer(CorsLayer::permissive())
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(|request: &Request<axum::body::Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::span!(
                        target: API_LOG_TARGET,
                        tracing::Level::INFO, "request", method = %method, uri = %uri, request_id = %request_id);
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::span!(
                        target: API_LOG_TARGET,
                        tracing::Level::INFO, "response", latency = %latency_ms, status = %status_code, request_id = %request_id);
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
}

/// Responds to any request that does not match a route.
pub async fn unknown_endpoint_handler() -> Response {
    unknown_endpoint_response()
}

#[derive(Clone, Default)]
struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).expect("UUID is a valid HTTP header value");
        Some(RequestId::new(id))
    }
}
