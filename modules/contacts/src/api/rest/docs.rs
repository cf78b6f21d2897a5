//! `OpenAPI` document and interactive docs for the Contacts API.
#![allow(clippy::non_ascii_literal)]

use std::sync::Arc;

use axum::Router;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use utoipa::OpenApi;

use super::dto::{ContactDto, ContactPayload, ErrorBody, MessageBody};
use super::handlers;
use super::routes::BASE_PATH;

/// Where the interactive docs are mounted.
pub const DOCS_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        version = "1.0",
        description = "API для управления телефонными контактами",
    ),
    servers((url = "/api/v1")),
    paths(
        handlers::list_contacts,
        handlers::get_contact,
        handlers::create_contact,
        handlers::update_contact,
        handlers::delete_contact,
    ),
    components(schemas(ContactDto, ContactPayload, ErrorBody, MessageBody)),
    tags((name = "contacts", description = "Phone contacts"))
)]
pub struct ApiDoc;

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Contacts API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/doc.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn serve_docs() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Routes serving `/swagger/doc.json` and the Swagger UI page.
///
/// The document is built once and served as static JSON.
pub fn docs_router() -> Router {
    let doc = Arc::new(ApiDoc::openapi());
    tracing::debug!(
        base_path = BASE_PATH,
        operations = doc.paths.paths.len(),
        "Mounting API docs"
    );

    Router::new()
        .route(
            &format!("{DOCS_PATH}/doc.json"),
            get(move || {
                let doc = Arc::clone(&doc);
                async move {
                    ([(header::CACHE_CONTROL, "no-store")], axum::Json(doc.as_ref())).into_response()
                }
            }),
        )
        .route(&format!("{DOCS_PATH}/index.html"), get(serve_docs))
        .route(DOCS_PATH, get(serve_docs))
}
