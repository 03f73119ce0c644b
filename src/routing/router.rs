//! The route table root.
//!
//! # Responsibilities
//! - Own every route node, the root pipeline and the multiplexer
//! - Derive routes by path, creating each normalized path exactly once
//! - Publish per-path method lists for live middleware
//! - Dispatch requests through the multiplexer
//!
//! # Design Decisions
//! - Routes live in an arena indexed by path; handles borrow the router
//! - Root pipes are resolved when a handler is attached, route pipes are
//!   copied from the parent when the route is derived
//! - Re-deriving an existing path layers the caller's pipes on top, skipping
//!   the leading pipes the route already shares with the caller

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use arc_swap::ArcSwap;
use axum::extract::Request;
use axum::http::Method;
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::{Service, ServiceExt};

use super::mux::Mux;
use super::path;
use super::route::{Route, RouteEntry, RouteInfo};
use super::RouteError;
use crate::http::middleware::allowed_methods;
use crate::pipeline::{Pipe, Pipeline};

/// Path → registered methods, as seen by request-time middleware.
pub(crate) type MethodTable = HashMap<String, Vec<Method>>;

/// HTTP router with hierarchical middleware pipelines.
#[derive(Default)]
pub struct Router {
    pub(crate) mux: Mux,
    pub(crate) entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
    pub(crate) pipeline: Pipeline,
    methods: Arc<ArcSwap<MethodTable>>,
}

impl Router {
    /// Create a router with no routes and an empty root pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pipe to the root pipeline.
    pub fn layer(&mut self, pipe: Pipe) -> &mut Self {
        self.layers([pipe])
    }

    /// Append several pipes to the root pipeline, in order.
    pub fn layers<I>(&mut self, pipes: I) -> &mut Self
    where
        I: IntoIterator<Item = Pipe>,
    {
        self.pipeline = self.pipeline.with(pipes);
        self
    }

    /// Append every pipe of `pipeline` to the root pipeline.
    pub fn layer_pipeline(&mut self, pipeline: &Pipeline) -> &mut Self {
        self.pipeline = self.pipeline.chain(pipeline);
        self
    }

    /// The root pipeline, outermost for every handler attached from now on.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Get or create the route at `path`.
    pub fn route(&mut self, path: &str) -> Result<Route<'_>, RouteError> {
        self.derive(path, None)
    }

    pub(crate) fn derive(
        &mut self,
        path: &str,
        inherited: Option<Pipeline>,
    ) -> Result<Route<'_>, RouteError> {
        let path = path::normalize(path)?;

        if let Some(&id) = self.index.get(&path) {
            let entry = &mut self.entries[id];
            if let Some(inherited) = inherited {
                // Pipes already inherited through this chain are not layered again.
                let shared = entry.pipeline.common_prefix_len(&inherited);
                if shared < inherited.len() {
                    entry.pipeline = entry.pipeline.with(inherited.iter().skip(shared).cloned());
                    tracing::debug!(
                        path = %entry.path,
                        layered = inherited.len() - shared,
                        pipes = entry.pipeline.len(),
                        "Route re-derived through a new chain, pipes layered"
                    );
                }
            }
            return Ok(Route::new(self, id));
        }

        let id = self.entries.len();
        let entry = RouteEntry::new(path.clone(), inherited.unwrap_or_default());
        tracing::debug!(path = %path, pipes = entry.pipeline.len(), "Route created");
        self.entries.push(entry);
        self.index.insert(path, id);
        self.publish_methods(id);
        Ok(Route::new(self, id))
    }

    /// Make the current method list of route `id` visible to live middleware.
    pub(crate) fn publish_methods(&self, id: usize) {
        let entry = &self.entries[id];
        let mut table = MethodTable::clone(&self.methods.load());
        table.insert(entry.path.clone(), entry.methods());
        self.methods.store(Arc::new(table));
    }

    /// Every route in creation order.
    pub fn all_routes(&self) -> Vec<&RouteEntry> {
        self.entries.iter().collect()
    }

    /// Serializable snapshot of the route table.
    pub fn describe(&self) -> Vec<RouteInfo> {
        self.entries.iter().map(RouteInfo::from).collect()
    }

    /// Pipe that advertises the matched route's methods in
    /// `Access-Control-Allow-Methods`, or `*` for routes without any.
    pub fn allowed_methods(&self) -> Pipe {
        allowed_methods::pipe(self.methods.clone())
    }

    /// Compile the table into an axum router, e.g. for `axum::serve`.
    pub fn into_axum_router(mut self) -> axum::Router {
        self.mux.dispatcher()
    }
}

impl Service<Request> for Router {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        Box::pin(self.mux.dispatcher().oneshot(req))
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.entries.len())
            .field("pipes", &self.pipeline.len())
            .finish()
    }
}
