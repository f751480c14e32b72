//! API routes for the [`info`](crate::servers::apis::context::info) API context.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::get_info_handler;
use crate::core::Phonebook;
use crate::servers::apis::routes::unknown_endpoint_handler;

/// It adds the routes to the router for the [`info`](crate::servers::apis::context::info) API context.
pub fn add(prefix: &str, router: Router, phonebook: Arc<Phonebook>) -> Router {
    router.route(
        &format!("{prefix}/info"),
        get(get_info_handler).fallback(unknown_endpoint_handler).with_state(phonebook),
    )
}
