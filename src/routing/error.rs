//! Route table configuration errors.
//!
//! All of these indicate a mistake in the route definitions and are raised
//! while the table is being built, never while serving.

use axum::http::Method;

/// Errors raised while building the route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("invalid route {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("method [{method}] on route {path:?} already exists")]
    DuplicateMethod { method: Method, path: String },

    #[error("pattern {pattern:?} is already registered")]
    DuplicatePattern { pattern: String },

    #[error("method {method:?} cannot be routed")]
    UnsupportedMethod { method: String },
}
