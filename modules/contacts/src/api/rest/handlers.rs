//! REST handlers for the Contacts module.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;

use super::dto::{ContactDto, ContactPayload, ErrorBody, MessageBody};
use super::error::{CONTACT_DELETED, ContactsResult};
use crate::domain::service::ContactsService;

/// List contacts
///
/// `GET /api/v1/contacts`: every contact in stored order.
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    operation_id = "list_contacts",
    responses(
        (status = 200, description = "All contacts", body = [ContactDto]),
    )
)]
pub async fn list_contacts(
    Extension(svc): Extension<Arc<ContactsService>>,
) -> Json<Vec<ContactDto>> {
    Json(svc.list().into_iter().map(ContactDto::from).collect())
}

/// Get a contact by id
///
/// `GET /api/v1/contacts/{id}`
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    tag = "contacts",
    operation_id = "get_contact",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = ContactDto),
        (status = 404, description = "No contact with this id", body = ErrorBody),
    )
)]
pub async fn get_contact(
    Extension(svc): Extension<Arc<ContactsService>>,
    Path(id): Path<String>,
) -> ContactsResult<Json<ContactDto>> {
    let contact = svc.get(&id)?;
    Ok(Json(contact.into()))
}

/// Create a contact
///
/// `POST /api/v1/contacts`: any `id` in the body is ignored, the registry assigns one.
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "contacts",
    operation_id = "create_contact",
    request_body(content = ContactPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "Contact created", body = ContactDto),
        (status = 400, description = "Body is not a contact", body = ErrorBody),
    )
)]
pub async fn create_contact(
    Extension(svc): Extension<Arc<ContactsService>>,
    body: Bytes,
) -> ContactsResult<(StatusCode, Json<ContactDto>)> {
    let payload = ContactPayload::decode(&body)?;
    let contact = svc.create(payload.into());
    Ok((StatusCode::CREATED, Json(contact.into())))
}

/// Replace a contact
///
/// `PUT /api/v1/contacts/{id}`: the body is decoded before the lookup, so a bad
/// body on an unknown id is a 400.
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    tag = "contacts",
    operation_id = "update_contact",
    params(("id" = String, Path, description = "Contact id")),
    request_body(content = ContactPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "Contact updated", body = ContactDto),
        (status = 400, description = "Body is not a contact", body = ErrorBody),
        (status = 404, description = "No contact with this id", body = ErrorBody),
    )
)]
pub async fn update_contact(
    Extension(svc): Extension<Arc<ContactsService>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ContactsResult<Json<ContactDto>> {
    let payload = ContactPayload::decode(&body)?;
    if payload.id.as_deref().is_some_and(|given| given != id) {
        tracing::debug!(contact_id = %id, "Ignoring id supplied in update body");
    }
    let contact = svc.update(&id, payload.into())?;
    Ok(Json(contact.into()))
}

/// Delete a contact
///
/// `DELETE /api/v1/contacts/{id}`
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    tag = "contacts",
    operation_id = "delete_contact",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageBody),
        (status = 404, description = "No contact with this id", body = ErrorBody),
    )
)]
pub async fn delete_contact(
    Extension(svc): Extension<Arc<ContactsService>>,
    Path(id): Path<String>,
) -> ContactsResult<Json<MessageBody>> {
    svc.delete(&id)?;
    Ok(Json(MessageBody {
        message: CONTACT_DELETED.to_owned(),
    }))
}
