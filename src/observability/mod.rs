//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry.rs  → debug events when groups are registered
//! discovery.rs → error events when a page write fails
//! server.rs    → TraceLayer request spans, lifecycle info events
//!     → logging.rs (fmt subscriber on stdout)
//! ```
//!
//! # Design Decisions
//! - Structured fields (block, error, prefix) rather than formatted banners
//! - Only the binary installs a subscriber; the library just emits events

pub mod logging;
