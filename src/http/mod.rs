//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, TraceLayer)
//!     → application groups, or
//!     → discovery.rs (render registry, stream page to client)
//! ```

pub mod discovery;
pub mod server;

pub use discovery::{report_write_error, DiscoveryHandler};
pub use server::IndexServer;
