//! REST API layer for the Contacts module.

pub mod docs;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
