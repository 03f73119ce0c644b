//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table construction (at startup):
//!     Router::route(path) / Route::route(pattern)
//!     → path.rs (sanitize + validate)
//!     → router.rs (get or create node, inherit parent pipes)
//!     → route.rs (layer pipes, attach handlers)
//!     → root pipes ++ route pipes, built around the handler
//!     → mux.rs (register "METHOD /path" with axum)
//!
//! Request:
//!     Router / axum::Router
//!     → mux (path + method match)
//!     → composed handler (pipes outermost-first, then handler)
//! ```
//!
//! # Design Decisions
//! - Table is built once, then only read while serving
//! - Configuration mistakes are errors at build time, never at request time
//! - Exact literal paths only; no captures

mod error;
mod mux;
pub mod path;
mod route;
mod router;

pub use error::RouteError;
pub use route::{Route, RouteEntry, RouteInfo};
pub use router::Router;
pub(crate) use router::MethodTable;
