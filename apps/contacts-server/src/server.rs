//! HTTP host: router assembly, middleware stack and the serve loop.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, Response};
use axum::routing::get;
use contacts::ContactsModule;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assembles the application router.
///
/// Layers are registered innermost first, so at runtime a request passes
/// `SetRequestId` → `PropagateRequestId` → Trace → `BodyLimit` → routes.
pub fn build_router(module: &ContactsModule, cfg: &ServerConfig) -> Router {
    let mut router = module.register_rest(Router::new());
    if cfg.enable_docs {
        router = ContactsModule::register_docs(router);
    }
    router = router.route("/healthz", get(|| async { "ok" }));

    router = router
        .layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes))
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes));

    router = apply_trace_layer(router);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
                tracing::debug!(parent: span, "Request completed");
            }),
    )
}

/// Binds `addr` and serves until Ctrl+C or SIGTERM, then drains.
///
/// # Errors
/// Returns an error if the socket cannot be bound or the server fails.
pub async fn serve(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);
    serve_until(listener, router, shutdown_signal()).await
}

async fn serve_until<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

/// Resolves on the first Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = fire_on_signal("ctrl_c", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = fire_on_signal("sigterm", async {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), io::Error>(())
    });
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("HTTP server shutting down gracefully");
}

/// Waits for `listener`. A listener that fails is logged and never resolves.
async fn fire_on_signal<F>(name: &'static str, listener: F)
where
    F: Future<Output = io::Result<()>>,
{
    match listener.await {
        Ok(()) => tracing::info!(signal = name, "Shutdown signal received"),
        Err(e) => {
            tracing::error!(signal = name, error = %e, "Signal listener failed, ignoring it");
            std::future::pending::<()>().await;
        }
    }
}
