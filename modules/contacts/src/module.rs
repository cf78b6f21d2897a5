//! Module declaration for the Contacts module.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::api::rest::{docs, routes};
use crate::config::ContactsConfig;
use crate::domain::model::demo_contacts;
use crate::domain::service::ContactsService;
use crate::infra::InMemoryContactsRepository;

/// Contacts module.
///
/// Owns the registry for the lifetime of the serving context and hands it to
/// the REST layer; nothing else holds contact state.
#[derive(Clone)]
pub struct ContactsModule {
    service: Arc<ContactsService>,
}

impl ContactsModule {
    /// Builds a fresh registry from configuration.
    #[must_use]
    pub fn new(cfg: &ContactsConfig) -> Self {
        let seed = if cfg.seed_demo_data {
            demo_contacts()
        } else {
            Vec::new()
        };

        let repo = Arc::new(InMemoryContactsRepository::new(seed, cfg.id_strategy));
        let service = Arc::new(ContactsService::new(repo));

        info!(
            contacts = service.count(),
            id_strategy = ?cfg.id_strategy,
            "Contacts module initialized"
        );

        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> Arc<ContactsService> {
        Arc::clone(&self.service)
    }

    /// Adds the `/api/v1/contacts` routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering contacts REST routes");
        routes::register_routes(router, self.service())
    }

    /// Adds `/swagger/doc.json` and the Swagger UI page to `router`.
    #[must_use]
    pub fn register_docs(router: Router) -> Router {
        router.merge(docs::docs_router())
    }
}
