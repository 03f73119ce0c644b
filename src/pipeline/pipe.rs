//! A single middleware transformation.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::IntoResponse;
use tower::{Layer, Service};

use super::Handler;

/// Wraps a handler into a new handler: `Handler -> Handler`.
#[derive(Clone)]
pub struct Pipe {
    wrap: Arc<dyn Fn(Handler) -> Handler + Send + Sync>,
}

impl Pipe {
    /// Create a pipe from a raw handler transformation.
    pub fn new<F>(wrap: F) -> Self
    where
        F: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        Self {
            wrap: Arc::new(wrap),
        }
    }

    /// Create a pipe from an async middleware function receiving the request
    /// and the next handler in the chain.
    ///
    /// ```ignore
    /// let pipe = Pipe::from_fn(|req, next: Handler| async move {
    ///     tracing::info!(path = %req.uri().path(), "before");
    ///     next.run(req).await
    /// });
    /// ```
    pub fn from_fn<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request, Handler) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self::new(move |next: Handler| {
            let f = f.clone();
            Handler::from_boxed(move |req| {
                let fut = f(req, next.clone());
                Box::pin(async move { fut.await.into_response() })
            })
        })
    }

    /// Adapt a tower layer (e.g. from `tower-http`) into a pipe.
    pub fn from_layer<L>(layer: L) -> Self
    where
        L: Layer<Handler> + Send + Sync + 'static,
        L::Service: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        Self::new(move |next| Handler::from_service(layer.layer(next)))
    }

    /// Wrap `next`, producing the outer handler.
    pub fn apply(&self, next: Handler) -> Handler {
        (self.wrap)(next)
    }

    /// Whether both values are the same pipe instance.
    pub fn ptr_eq(&self, other: &Pipe) -> bool {
        Arc::ptr_eq(&self.wrap, &other.wrap)
    }
}

impl fmt::Debug for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe").finish_non_exhaustive()
    }
}

