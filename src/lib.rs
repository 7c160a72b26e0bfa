//! Route index: records every route registered through an HTTP router,
//! grouped by path prefix, and serves them as an HTML discovery page.

pub mod config;
pub mod http;
pub mod index;
pub mod observability;
pub mod routing;

pub use config::ServiceConfig;
pub use http::{DiscoveryHandler, IndexServer};
pub use index::{GroupIndex, Registry};
pub use routing::{AxumRouter, GroupFactory, Route, RouteGroup, RouteSet, RouteTarget};
