//! Route path normalization.
//!
//! # Rules
//! - Runs of `/` collapse into a single `/`
//! - A path is non-empty and starts with `/`
//! - Only the root path `/` may end with `/`
//! - Whitespace is not allowed, it separates method from path in patterns
//! - Segments may not use the multiplexer's capture syntax (`{..}`, `:x`, `*x`)

use super::RouteError;

/// Collapse every run of consecutive `/` into one.
pub fn sanitize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && out.ends_with('/') {
            continue;
        }
        out.push(ch);
    }
    out
}

/// Check an already sanitized path.
pub fn validate(path: &str) -> Result<(), RouteError> {
    let invalid = |reason| RouteError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid("routes cannot be empty"));
    }
    if !path.starts_with('/') {
        return Err(invalid("routes must begin with '/'"));
    }
    if path.len() > 1 && path.ends_with('/') {
        return Err(invalid("routes cannot end with '/'"));
    }
    if path.contains(char::is_whitespace) {
        return Err(invalid("routes cannot contain whitespace"));
    }
    if path.contains(['{', '}']) {
        return Err(invalid("routes cannot contain '{' or '}'"));
    }
    if path.split('/').any(|seg| seg.starts_with([':', '*'])) {
        return Err(invalid("route segments cannot start with ':' or '*'"));
    }
    Ok(())
}

/// Sanitize then validate.
pub fn normalize(path: &str) -> Result<String, RouteError> {
    let path = sanitize(path);
    validate(&path)?;
    Ok(path)
}
