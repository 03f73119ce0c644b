//! Route nodes and the fluent handle used to configure them.

use axum::http::Method;
use serde::Serialize;

use super::{RouteError, Router};
use crate::pipeline::{Handler, Pipe, Pipeline};
use crate::set::Set;

/// One normalized path in the route table.
#[derive(Debug)]
pub struct RouteEntry {
    pub(crate) path: String,
    pub(crate) pipeline: Pipeline,
    pub(crate) methods: Set<Method>,
}

impl RouteEntry {
    pub(crate) fn new(path: String, pipeline: Pipeline) -> Self {
        Self {
            path,
            pipeline,
            methods: Set::new(),
        }
    }

    /// Normalized absolute path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pipes applied by this route, including those inherited from the
    /// routes it was derived from. Router-level pipes are not included.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Methods with a registered handler, sorted by name.
    pub fn methods(&self) -> Vec<Method> {
        let mut methods = self.methods.to_vec();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
    }
}

/// Serializable summary of a route, for introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub methods: Vec<String>,
    pub pipes: usize,
}

impl From<&RouteEntry> for RouteInfo {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            path: entry.path.clone(),
            methods: entry.methods().iter().map(|m| m.to_string()).collect(),
            pipes: entry.pipeline.len(),
        }
    }
}

/// Handle to a route owned by a [`Router`].
///
/// Obtained from [`Router::route`] or [`Route::route`]. Every configuration
/// call goes straight through to the router's table, so dropping the handle
/// loses nothing; calling `route` again with the same path returns the same
/// node.
pub struct Route<'r> {
    router: &'r mut Router,
    id: usize,
}

impl<'r> Route<'r> {
    pub(crate) fn new(router: &'r mut Router, id: usize) -> Self {
        Self { router, id }
    }

    fn entry(&self) -> &RouteEntry {
        &self.router.entries[self.id]
    }

    fn entry_mut(&mut self) -> &mut RouteEntry {
        &mut self.router.entries[self.id]
    }

    /// Normalized absolute path of this route.
    pub fn path(&self) -> &str {
        &self.entry().path
    }

    /// This route's own pipes, inherited ones included.
    pub fn pipeline(&self) -> &Pipeline {
        &self.entry().pipeline
    }

    /// Derive a child route at `self.path + pattern`. The child starts with a
    /// copy of this route's pipeline.
    pub fn route(&mut self, pattern: &str) -> Result<Route<'_>, RouteError> {
        let entry = self.entry();
        let path = format!("{}{}", entry.path, pattern);
        let inherited = entry.pipeline.clone();
        self.router.derive(&path, Some(inherited))
    }

    /// Append a pipe to this route.
    #[must_use]
    pub fn layer(self, pipe: Pipe) -> Self {
        self.layers([pipe])
    }

    /// Append several pipes to this route, in order.
    #[must_use]
    pub fn layers<I>(mut self, pipes: I) -> Self
    where
        I: IntoIterator<Item = Pipe>,
    {
        let entry = self.entry_mut();
        entry.pipeline = entry.pipeline.with(pipes);
        self
    }

    /// Append every pipe of `pipeline` to this route.
    #[must_use]
    pub fn layer_pipeline(mut self, pipeline: &Pipeline) -> Self {
        let entry = self.entry_mut();
        entry.pipeline = entry.pipeline.chain(pipeline);
        self
    }

    /// Attach `handler` for `method`, or for every method when `None`.
    ///
    /// The handler runs behind the router's pipes, then this route's pipes.
    pub fn handle(&mut self, method: Option<Method>, handler: Handler) -> Result<(), RouteError> {
        let router = &mut *self.router;
        let entry = &router.entries[self.id];

        let pattern = match &method {
            Some(method) if entry.methods.has(method) => {
                return Err(RouteError::DuplicateMethod {
                    method: method.clone(),
                    path: entry.path.clone(),
                });
            }
            Some(method) => format!("{} {}", method, entry.path),
            None => entry.path.clone(),
        };

        let chain = router.pipeline.chain(&entry.pipeline);
        router.mux.register(&pattern, chain.build(handler))?;

        if let Some(method) = method {
            let entry = &mut router.entries[self.id];
            entry.methods.add(method).map_err(|dup| RouteError::DuplicateMethod {
                method: dup.0,
                path: entry.path.clone(),
            })?;
        }
        router.publish_methods(self.id);

        tracing::debug!(pattern = %pattern, pipes = chain.len(), "Handler registered");
        Ok(())
    }

    /// Attach an axum handler function for `method`, or every method when `None`.
    pub fn handle_fn<H, T>(&mut self, method: Option<Method>, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.handle(method, Handler::new(handler))
    }

    /// Attach `handler` for `GET`.
    pub fn get(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(Some(Method::GET), handler)
    }

    /// Attach an axum handler function for `GET`.
    pub fn get_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.get(Handler::new(handler))
    }

    /// Attach `handler` for `POST`.
    pub fn post(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(Some(Method::POST), handler)
    }

    /// Attach an axum handler function for `POST`.
    pub fn post_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.post(Handler::new(handler))
    }

    /// Attach `handler` for `PUT`.
    pub fn put(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(Some(Method::PUT), handler)
    }

    /// Attach an axum handler function for `PUT`.
    pub fn put_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.put(Handler::new(handler))
    }

    /// Attach `handler` for `DELETE`.
    pub fn delete(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(Some(Method::DELETE), handler)
    }

    /// Attach an axum handler function for `DELETE`.
    pub fn delete_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.delete(Handler::new(handler))
    }

    /// Attach `handler` for `PATCH`.
    pub fn patch(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(Some(Method::PATCH), handler)
    }

    /// Attach an axum handler function for `PATCH`.
    pub fn patch_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.patch(Handler::new(handler))
    }

    /// Attach a handler matching any method not otherwise registered here.
    pub fn any(&mut self, handler: Handler) -> Result<(), RouteError> {
        self.handle(None, handler)
    }

    /// Attach an axum handler function for any method.
    pub fn any_fn<H, T>(&mut self, handler: H) -> Result<(), RouteError>
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        self.any(Handler::new(handler))
    }

    /// Methods registered on this exact path.
    pub fn methods(&self) -> Vec<Method> {
        self.entry().methods()
    }

    /// Every route known to the owning router.
    pub fn all_routes(&self) -> Vec<&RouteEntry> {
        self.router.all_routes()
    }
}

impl std::fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route").field("path", &self.path()).finish()
    }
}
