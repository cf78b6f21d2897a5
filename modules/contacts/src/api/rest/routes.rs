//! Route table for the Contacts REST API.

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::ContactsService;

/// Prefix every contacts route is nested under.
pub const BASE_PATH: &str = "/api/v1";

/// Mounts the five contact routes under [`BASE_PATH`] on `router`.
pub fn register_routes(router: Router, service: Arc<ContactsService>) -> Router {
    let api = Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(Extension(service));

    router.nest(BASE_PATH, api)
}
