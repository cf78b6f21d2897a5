//! DTOs for the Contacts REST API.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::error::DomainError;
use crate::domain::model::{Contact, NewContact};

/// REST DTO for a stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Ivan Ivanov")]
    pub name: String,
    #[schema(example = "+79161234567")]
    pub phone: String,
    #[schema(example = "ivan@mail.ru")]
    pub email: String,
}

/// Request body for create and update. Missing or `null` fields are stored as
/// empty strings; `id` is accepted but never trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactPayload {
    pub id: Option<String>,
    #[schema(example = "Ivan Ivanov")]
    pub name: Option<String>,
    #[schema(example = "+79161234567")]
    pub phone: Option<String>,
    #[schema(example = "ivan@mail.ru")]
    pub email: Option<String>,
}

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation response body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            phone: contact.phone,
            email: contact.email,
        }
    }
}

impl From<ContactPayload> for NewContact {
    fn from(payload: ContactPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            phone: payload.phone.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
        }
    }
}

impl ContactPayload {
    /// Decodes a request body regardless of its declared content type.
    ///
    /// Only the first JSON value is read; anything after it is ignored. That
    /// value must be an object. Keys are applied in document order and match
    /// field names ASCII case-insensitively, so the last matching key wins.
    /// A `null` value leaves the field as it was; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPayload` for an empty body, malformed JSON, a non-object
    /// value or a field that is neither a string nor `null`.
    pub fn decode(body: &[u8]) -> Result<Self, DomainError> {
        let OrderedObject(entries) = serde_json::Deserializer::from_slice(body)
            .into_iter::<OrderedObject>()
            .next()
            .ok_or_else(|| DomainError::invalid_payload("empty request body"))?
            .map_err(|e| DomainError::invalid_payload(e.to_string()))?;

        let mut payload = Self::default();
        for (key, value) in entries {
            let (field, slot) = match key.to_ascii_lowercase().as_str() {
                "id" => ("id", &mut payload.id),
                "name" => ("name", &mut payload.name),
                "phone" => ("phone", &mut payload.phone),
                "email" => ("email", &mut payload.email),
                _ => continue,
            };
            match value {
                Value::Null => {}
                Value::String(s) => *slot = Some(s),
                other => {
                    return Err(DomainError::invalid_payload(format!(
                        "field '{field}' must be a string, got {}",
                        json_type_name(&other)
                    )));
                }
            }
        }
        Ok(payload)
    }
}

/// A JSON object's entries in document order, duplicates included.
struct OrderedObject(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for OrderedObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(4));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedObject(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
