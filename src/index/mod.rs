//! Route index subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Registry::create_group (per prefix)
//!     → GroupIndex { prefix, RouteSet } appended to the group list
//!
//! Per discovery request:
//!     Registry::render
//!     → page.rs header
//!     → each GroupIndex's <li> entries, in creation order
//!     → page.rs footer
//! ```
//!
//! # Design Decisions
//! - Output is always HTML; no escaping
//! - Rendering is a pure read of the current group list

pub mod page;
pub mod registry;

pub use registry::{GroupIndex, Registry};
