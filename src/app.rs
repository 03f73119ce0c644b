//! The demo route table served by the `pipe-router` binary.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::http::header::SERVER;
use axum::http::HeaderValue;
use axum::Json;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::ServerConfig;
use crate::http::middleware::{logging, request_id};
use crate::pipeline::{Handler, Pipe};
use crate::routing::{RouteError, RouteInfo, Router};

/// Build the demo table: router-wide pipes from `config`, then the routes.
pub fn build_router(config: &ServerConfig) -> Result<Router, RouteError> {
    let mut router = Router::new();

    if config.observability.access_log {
        router.layer(logging());
    }
    if config.middleware.request_id {
        router.layer(request_id());
    }
    if let Some(value) = config
        .middleware
        .server_header
        .as_deref()
        .and_then(|v| HeaderValue::from_str(v).ok())
    {
        router.layer(Pipe::from_layer(SetResponseHeaderLayer::overriding(SERVER, value)));
    }
    if config.middleware.allowed_methods {
        let allowed = router.allowed_methods();
        router.layer(allowed);
    }

    router.route("/")?.get_fn(|| async { "Hello, World!" })?;

    let mut ping = router.route("/ping")?;
    ping.get_fn(|| async { "get-pong" })?;
    ping.post_fn(|| async { "post-pong" })?;

    let mut api = router
        .route("/api")?
        .layer(Pipe::from_layer(SetResponseHeaderLayer::if_not_present(
            axum::http::HeaderName::from_static("x-api-version"),
            HeaderValue::from_static("1"),
        )));
    api.route("/echo")?.post_fn(|body: String| async move { body })?;
    api.route("/health")?.any(Handler::new(|| async { "ok" }))?;

    // Filled once the table is complete, so the endpoint lists itself too.
    let table = Arc::new(ArcSwap::from_pointee(Vec::<RouteInfo>::new()));
    let served = table.clone();
    router.route("/debug/routes")?.get_fn(move || {
        let table = served.load_full();
        async move { Json(Vec::clone(&table)) }
    })?;
    table.store(Arc::new(router.describe()));

    Ok(router)
}
