//! Contacts Module
//!
//! An in-memory registry of phone contacts exposed as a small REST API under
//! `/api/v1/contacts`, plus the `OpenAPI` document describing it.

pub mod module;
pub use module::ContactsModule;

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::{ContactsConfig, IdStrategy};
pub use domain::model::{Contact, NewContact};
pub use domain::service::ContactsService;
