//! HTTP routing with hierarchical middleware pipelines.
//!
//! A [`Router`] maps method + path to handlers. Middleware ([`Pipe`]s) can be
//! attached to the router, to a route, or to a route subtree; at handler
//! attach time the router's pipes, then the route's accumulated pipes, are
//! folded around the handler, first-attached outermost.
//!
//! ```ignore
//! let mut router = Router::new();
//! router.layer(request_id());
//!
//! let mut api = router.route("/api")?.layer(auth);
//! api.route("/users")?.get_fn(list_users)?;
//!
//! axum::serve(listener, router.into_axum_router()).await?;
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;
pub mod routing;
pub mod set;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pipeline::{Handler, Pipe, Pipeline};
pub use routing::{Route, RouteError, Router};
pub use set::Set;
