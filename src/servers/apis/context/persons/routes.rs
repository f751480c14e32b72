//! API routes for the [`persons`](crate::servers::apis::context::persons) API context.
//!
//! A request with a method that has no handler on one of these paths gets
//! the same `404 unknown endpoint` response as an unknown path.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{
    add_contact_handler, delete_contact_handler, get_contact_handler, get_contacts_handler, update_contact_handler,
};
use crate::core::Phonebook;
use crate::servers::apis::routes::unknown_endpoint_handler;

/// It adds the routes to the router for the [`persons`](crate::servers::apis::context::persons) API context.
pub fn add(prefix: &str, router: Router, phonebook: Arc<Phonebook>) -> Router {
    let prefix = format!("{prefix}/persons");

    router
        // Collection
        .route(
            &prefix,
            get(get_contacts_handler)
                .post(add_contact_handler)
                .fallback(unknown_endpoint_handler)
                .with_state(phonebook.clone()),
        )
        // Single contact
        .route(
            &format!("{prefix}/:id"),
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler)
                .fallback(unknown_endpoint_handler)
                .with_state(phonebook),
        )
}
