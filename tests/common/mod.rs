//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use pipe_router::{Handler, Pipe};
use tower::ServiceExt;

/// Pipe that writes `num` in front of everything the inner handlers write.
pub fn add_num_to_response(num: u32) -> Pipe {
    Pipe::from_fn(move |req: Request, next: Handler| async move {
        let res = next.run(req).await;
        let (mut parts, body) = res.into_parts();
        let inner = to_bytes(body, usize::MAX).await.unwrap_or_default();

        let mut out = num.to_string().into_bytes();
        out.extend_from_slice(&inner);
        parts.headers.remove(header::CONTENT_LENGTH);
        Response::from_parts(parts, Body::from(out))
    })
}

/// Send a request through an axum router and collect status, headers and body.
pub async fn send(app: &axum::Router, method: Method, path: &str) -> (StatusCode, Response<()>, String) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let (parts, body) = res.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    (
        parts.status,
        Response::from_parts(parts, ()),
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

/// Body of a successful GET.
pub async fn get_body(app: &axum::Router, path: &str) -> String {
    let (status, _, body) = send(app, Method::GET, path).await;
    assert_eq!(status, StatusCode::OK, "GET {path}");
    body
}
