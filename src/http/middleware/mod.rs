//! Built-in pipes.
//!
//! # Available Pipes
//! - [`Router::allowed_methods`](crate::Router::allowed_methods) - advertise
//!   the matched route's methods in `Access-Control-Allow-Methods`
//! - [`request_id()`] - propagate or generate `X-Request-ID`
//! - [`logging()`] - access log through `tracing`
//!
//! Any `tower` layer whose service is infallible can be used as a pipe via
//! [`Pipe::from_layer`](crate::Pipe::from_layer).

pub(crate) mod allowed_methods;
mod logging;
mod request_id;

pub use logging::logging;
pub use request_id::{request_id, RequestId, X_REQUEST_ID};
