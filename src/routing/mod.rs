//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registry::create_group(factory, prefix, configure)
//!     → group.rs (GroupFactory creates the router's group)
//!     → RouteGroup wraps it for the configure callback
//!     → get/post/delete/append
//!         → route.rs (record Route in RouteSet)
//!         → RouteTarget::register (router does the actual dispatch)
//! ```
//!
//! # Design Decisions
//! - The router is an external collaborator reached through two traits
//! - `axum_adapter.rs` is the only implementation shipped
//! - Recording happens before forwarding, never instead of it

pub mod axum_adapter;
pub mod group;
pub mod route;

pub use axum_adapter::{AxumGroup, AxumRouter};
pub use group::{GroupFactory, RouteGroup, RouteTarget};
pub use route::{Route, RouteSet};
