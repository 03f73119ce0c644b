//! Pattern registration on top of axum.
//!
//! # Responsibilities
//! - Accept `"<METHOD> <path>"` or bare `<path>` patterns
//! - Merge every registration for a path into one `MethodRouter`
//! - Compile the registrations into an `axum::Router` for dispatch
//!
//! # Design Decisions
//! - A bare path acts as the method fallback for that path, so method-specific
//!   handlers win and any other method reaches the bare handler
//! - Compilation is lazy and invalidated by every registration

use std::collections::{BTreeMap, HashSet};

use axum::http::Method;
use axum::routing::{MethodFilter, MethodRouter};

use super::RouteError;
use crate::pipeline::Handler;

#[derive(Default)]
pub(crate) struct Mux {
    entries: BTreeMap<String, MethodRouter>,
    catch_all: HashSet<String>,
    compiled: Option<axum::Router>,
}

impl Mux {
    /// Register `handler` under `pattern`.
    pub(crate) fn register(&mut self, pattern: &str, handler: Handler) -> Result<(), RouteError> {
        let (method, path) = match pattern.split_once(' ') {
            Some((method, path)) => (Some(method), path),
            None => (None, pattern),
        };

        let filter = method.map(method_filter).transpose()?;
        if filter.is_none() && !self.catch_all.insert(path.to_string()) {
            return Err(RouteError::DuplicatePattern {
                pattern: pattern.to_string(),
            });
        }

        let entry = self.entries.remove(path).unwrap_or_else(MethodRouter::new);
        let entry = match filter {
            Some(filter) => entry.on_service(filter, handler),
            None => entry.fallback_service(handler),
        };
        self.entries.insert(path.to_string(), entry);
        self.compiled = None;
        Ok(())
    }

    /// The compiled dispatcher for everything registered so far.
    pub(crate) fn dispatcher(&mut self) -> axum::Router {
        let entries = &self.entries;
        self.compiled
            .get_or_insert_with(|| {
                entries
                    .iter()
                    .fold(axum::Router::new(), |app, (path, methods)| {
                        app.route(path, methods.clone())
                    })
            })
            .clone()
    }
}

fn method_filter(method: &str) -> Result<MethodFilter, RouteError> {
    let unsupported = || RouteError::UnsupportedMethod {
        method: method.to_string(),
    };
    let method = Method::from_bytes(method.as_bytes()).map_err(|_| unsupported())?;
    MethodFilter::try_from(method).map_err(|_| unsupported())
}
