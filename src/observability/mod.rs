//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (route created, handler registered)
//! http::server (start/stop) + TraceLayer (per request spans)
//! logging pipe (access log)
//!     → tracing events
//!     → logging.rs subscriber (stdout)
//! ```

pub mod logging;
