//! Route groups and the seam to the external router.
//!
//! # Responsibilities
//! - Describe what the external router must provide (group creation, registration)
//! - Record every route registered through a group
//!
//! # Design Decisions
//! - Registration is forwarded as-is; the router's own contract decides failures
//! - Groups are only created through `Registry::create_group`

use axum::http::Method;

use crate::routing::route::{Route, RouteSet};

/// Something that can register a handler under (method, path).
///
/// `T` is the handler's extractor marker, so a single router can accept
/// handlers of any shape it knows how to call.
pub trait RouteTarget<H, T> {
    fn register(&mut self, method: Method, path: &str, handler: H);
}

/// Something that can create a sub-group of routes bound to a path prefix.
pub trait GroupFactory {
    /// The router's own group handle.
    type Group;

    /// Create a group at `prefix` and let `configure` register routes on it.
    fn with_group<F>(&mut self, prefix: &str, configure: F)
    where
        F: FnOnce(&mut Self::Group);
}

/// A named set of routes sharing a path prefix.
///
/// Wraps the router's group handle for the duration of the configuration
/// callback. Every registration goes to the router and into the route set.
#[derive(Debug)]
pub struct RouteGroup<'a, G> {
    name: String,
    routes: RouteSet,
    target: &'a mut G,
}

impl<'a, G> RouteGroup<'a, G> {
    pub(crate) fn new(name: impl Into<String>, target: &'a mut G) -> Self {
        Self {
            name: name.into(),
            routes: RouteSet::new(),
            target,
        }
    }

    /// The group's path prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routes registered on this group so far.
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Register `handler` under `method` and `path` (relative to the prefix).
    ///
    /// Any `Method` is accepted, extension methods included; how they are
    /// dispatched is up to the router.
    pub fn append<H, T>(&mut self, method: Method, path: &str, handler: H) -> &mut Self
    where
        G: RouteTarget<H, T>,
    {
        self.routes.add(Route::new(method.clone(), path));
        self.target.register(method, path, handler);
        self
    }

    pub fn get<H, T>(&mut self, path: &str, handler: H) -> &mut Self
    where
        G: RouteTarget<H, T>,
    {
        self.append(Method::GET, path, handler)
    }

    pub fn post<H, T>(&mut self, path: &str, handler: H) -> &mut Self
    where
        G: RouteTarget<H, T>,
    {
        self.append(Method::POST, path, handler)
    }

    pub fn delete<H, T>(&mut self, path: &str, handler: H) -> &mut Self
    where
        G: RouteTarget<H, T>,
    {
        self.append(Method::DELETE, path, handler)
    }

    pub(crate) fn into_parts(self) -> (String, RouteSet) {
        (self.name, self.routes)
    }
}
