//! Request ID propagation.
//!
//! Reuses an incoming `X-Request-ID` when present, otherwise generates a
//! UUID v4. The ID is available to inner pipes and handlers as a
//! [`RequestId`] extension and echoed on the response.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use uuid::Uuid;

use crate::pipeline::{Handler, Pipe};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID attached to the request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pipe that ensures every request carries an `X-Request-ID`.
pub fn request_id() -> Pipe {
    Pipe::from_fn(|mut req: Request, next: Handler| async move {
        let id = req
            .headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let value = HeaderValue::from_str(&id).ok();
        if let Some(value) = &value {
            req.headers_mut().insert(X_REQUEST_ID, value.clone());
        }
        req.extensions_mut().insert(RequestId(id));

        let mut res = next.run(req).await;
        if let Some(value) = value {
            res.headers_mut().insert(X_REQUEST_ID, value);
        }
        res
    })
}
