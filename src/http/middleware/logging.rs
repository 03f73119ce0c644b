//! Access logging pipe.

use std::time::{Duration, Instant};

use axum::extract::Request;

use crate::pipeline::{Handler, Pipe};

/// Pipe that logs method, path, status and latency of every request.
pub fn logging() -> Pipe {
    Pipe::from_fn(|req: Request, next: Handler| async move {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let res = next.run(req).await;

        tracing::info!(
            method = %method,
            path = %path,
            status = res.status().as_u16(),
            latency_ms = millis(start.elapsed()),
            "Request handled"
        );
        res
    })
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_micros(2_500)), 2);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
