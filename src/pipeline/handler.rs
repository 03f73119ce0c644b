//! Terminal request handlers.
//!
//! # Responsibilities
//! - Type-erase anything that can answer a request
//! - Accept both axum handler functions and tower services
//! - Act as a tower `Service` so it plugs into axum and tower layers
//!
//! # Design Decisions
//! - Cheap to clone (single `Arc`)
//! - Infallible: failures are expressed as responses, never as `Err`

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use tower::{Service, ServiceExt};

type HandlerFn = dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync;

/// A cloneable, type-erased request handler.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<HandlerFn>,
}

impl Handler {
    /// Wrap an axum handler function, e.g. `|| async { "hello" }` or
    /// `async fn echo(req: Request) -> Response`.
    pub fn new<H, T>(handler: H) -> Self
    where
        H: axum::handler::Handler<T, ()> + Sync,
        T: 'static,
    {
        Self::from_service(handler.with_state(()))
    }

    /// Wrap an infallible tower service.
    pub fn from_service<S>(service: S) -> Self
    where
        S: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        S::Response: IntoResponse,
        S::Future: Send + 'static,
    {
        Self::from_boxed(move |req| {
            let service = service.clone();
            Box::pin(async move {
                match service.oneshot(req).await {
                    Ok(res) => res.into_response(),
                    Err(never) => match never {},
                }
            })
        })
    }

    /// Wrap an async closure taking the raw request.
    pub fn from_fn<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self::from_boxed(move |req| {
            let fut = f(req);
            Box::pin(async move { fut.await.into_response() })
        })
    }

    pub(crate) fn from_boxed<F>(f: F) -> Self
    where
        F: Fn(Request) -> BoxFuture<'static, Response> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Run the handler against a request.
    pub fn run(&self, req: Request) -> BoxFuture<'static, Response> {
        (self.inner)(req)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

impl Service<Request> for Handler {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let fut = self.run(req);
        Box::pin(async move { Ok(fut.await) })
    }
}
