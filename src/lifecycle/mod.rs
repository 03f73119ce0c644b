//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Build route table → Bind listener → Serve
//!
//! Shutdown:
//!     signals.rs (Ctrl+C) → shutdown.rs broadcast → HttpServer drains and exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error, including a bad route table, is fatal
//! - Listener binds last (traffic only when the table is complete)

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
