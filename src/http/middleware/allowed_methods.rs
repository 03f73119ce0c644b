//! `Access-Control-Allow-Methods` advertisement.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::extract::{MatchedPath, Request};
use axum::http::header::ACCESS_CONTROL_ALLOW_METHODS;
use axum::http::{HeaderValue, Method};

use crate::pipeline::{Handler, Pipe};
use crate::routing::MethodTable;

pub(crate) fn pipe(table: Arc<ArcSwap<MethodTable>>) -> Pipe {
    Pipe::from_fn(move |req: Request, next: Handler| {
        let allow = req
            .extensions()
            .get::<MatchedPath>()
            .and_then(|matched| table.load().get(matched.as_str()).map(|m| header_value(m)));

        async move {
            let mut res = next.run(req).await;
            if let Some(allow) = allow {
                res.headers_mut().insert(ACCESS_CONTROL_ALLOW_METHODS, allow);
            }
            res
        }
    })
}

fn header_value(methods: &[Method]) -> HeaderValue {
    if methods.is_empty() {
        return HeaderValue::from_static("*");
    }
    let joined = methods
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    HeaderValue::from_str(&joined).unwrap_or_else(|_| HeaderValue::from_static("*"))
}
