//! REST error mapping for the Contacts module.
#![allow(clippy::non_ascii_literal)]

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::ErrorBody;
use crate::domain::error::DomainError;

/// Body text for a missing contact.
pub const CONTACT_NOT_FOUND: &str = "Контакт не найден";
/// Body text for a payload that could not be decoded.
pub const INVALID_DATA: &str = "Неверные данные";
/// Body text confirming a delete.
pub const CONTACT_DELETED: &str = "Контакт удален";

/// Handler error: a domain error rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

pub type ContactsResult<T> = Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self.0 {
            DomainError::NotFound { .. } => CONTACT_NOT_FOUND,
            DomainError::InvalidPayload { .. } => INVALID_DATA,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DomainError::NotFound { id } => {
                tracing::debug!(contact_id = %id, "Contact not found");
            }
            DomainError::InvalidPayload { reason } => {
                tracing::debug!(%reason, "Rejected contact payload");
            }
        }

        let body = ErrorBody {
            error: self.message().to_owned(),
        };
        (self.status(), Json(body)).into_response()
    }
}
