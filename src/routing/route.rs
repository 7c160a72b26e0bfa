//! Route descriptors and the de-duplicating route set.
//!
//! # Responsibilities
//! - Identify a registered handler by (method, path)
//! - Collapse repeated registrations of the same route
//!
//! # Design Decisions
//! - Equality is structural on both fields
//! - Iteration order is unspecified (hash order)

use std::collections::HashSet;
use std::fmt;

use axum::http::Method;

/// A registered (method, path) pair, path relative to its group prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Set of routes where no route can appear twice.
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: HashSet<Route>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route. Returns false if it was already present.
    pub fn add(&mut self, route: Route) -> bool {
        self.routes.insert(route)
    }

    /// All routes in the set, in no particular order.
    pub fn list(&self) -> Vec<Route> {
        self.routes.iter().cloned().collect()
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.routes.contains(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Extend<Route> for RouteSet {
    fn extend<I: IntoIterator<Item = Route>>(&mut self, iter: I) {
        self.routes.extend(iter);
    }
}

impl FromIterator<Route> for RouteSet {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
