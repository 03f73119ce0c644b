//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum::serve, timeout + trace layers)
//!     → Router (compiled route table)
//!     → middleware/ pipes and route handlers
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use server::HttpServer;
