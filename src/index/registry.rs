//! The registry of route groups.
//!
//! # Responsibilities
//! - Create groups through the router and keep their route sets
//! - Render every group into the discovery page
//!
//! # Design Decisions
//! - Handle is cheap to clone; clones share the same group list
//! - Group list is append-only and swapped atomically, so renders never block
//! - Groups render in creation order; routes within a group do not

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::response::{IntoResponse, Response};

use crate::http::discovery::DiscoveryHandler;
use crate::index::page;
use crate::routing::{GroupFactory, RouteGroup, RouteSet};

/// What is kept of a group once it has been configured.
#[derive(Debug, Clone)]
pub struct GroupIndex {
    name: String,
    routes: RouteSet,
}

impl GroupIndex {
    pub fn new(name: impl Into<String>, routes: RouteSet) -> Self {
        Self {
            name: name.into(),
            routes,
        }
    }

    /// The group's path prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// One `<li>` per route, in no particular order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        for route in self.routes.iter() {
            page::write_entry(out, &self.name, route);
        }
    }
}

#[derive(Debug)]
struct RegistryInner {
    title: String,
    groups: ArcSwap<Vec<Arc<GroupIndex>>>,
}

/// Owns every route group and renders the discovery page.
///
/// Construct one at startup and pass it to whatever registers routes or
/// serves the page.
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_title(page::DEFAULT_TITLE)
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                title: title.into(),
                groups: ArcSwap::from_pointee(Vec::new()),
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Create a group at `prefix` through `factory` and hand it to `configure`.
    ///
    /// The group is added to the page once `configure` returns.
    pub fn create_group<F, C>(&self, factory: &mut F, prefix: &str, configure: C)
    where
        F: GroupFactory,
        C: FnOnce(&mut RouteGroup<'_, F::Group>),
    {
        factory.with_group(prefix, |handle| {
            let mut group = RouteGroup::new(prefix, handle);
            configure(&mut group);

            let (name, routes) = group.into_parts();
            tracing::debug!(prefix = %name, routes = routes.len(), "Route group registered");
            self.push(GroupIndex::new(name, routes));
        });
    }

    fn push(&self, group: GroupIndex) {
        let group = Arc::new(group);
        self.inner.groups.rcu(|groups| {
            let mut next = Vec::with_capacity(groups.len() + 1);
            next.extend(groups.iter().cloned());
            next.push(group.clone());
            next
        });
    }

    /// Snapshot of the groups, in creation order.
    pub fn groups(&self) -> Vec<Arc<GroupIndex>> {
        self.inner.groups.load().iter().cloned().collect()
    }

    /// The full discovery page.
    pub fn render(&self) -> String {
        let groups = self.inner.groups.load();

        let mut out = page::header(&self.inner.title);
        for group in groups.iter() {
            group.render_into(&mut out);
        }
        out.push_str(page::FOOTER);
        out
    }

    /// An axum handler that serves `render()`.
    pub fn handler(&self) -> impl Fn() -> std::future::Ready<Response> + Clone + Send + Sync + 'static {
        let discovery = DiscoveryHandler::new(self.clone());
        move || std::future::ready(discovery.clone().into_response())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::group::testing::{noop, RecordingRouter};
    use crate::routing::Route;
    use axum::http::Method;

    fn entry(method: &str, href: &str) -> String {
        format!("<li>{method:>6} <a href=\"{href}\">{href}</a></li>")
    }

    #[test]
    fn test_empty_registry_renders_header_and_footer() {
        let registry = Registry::new();
        assert_eq!(
            registry.render(),
            format!("{}{}", page::header(page::DEFAULT_TITLE), page::FOOTER)
        );
        assert!(registry.groups().is_empty());
    }

    #[test]
    fn test_create_group_forwards_to_factory() {
        let registry = Registry::new();
        let mut router = RecordingRouter::default();

        registry.create_group(&mut router, "/users", |group| {
            group.get("/", noop).post("/", noop);
        });

        assert_eq!(router.groups.len(), 1);
        assert_eq!(router.groups[0].0, "/users");
        assert_eq!(router.groups[0].1.registered.len(), 2);

        let groups = registry.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "/users");
        assert!(groups[0].routes().contains(&Route::new(Method::POST, "/")));
    }

    #[test]
    fn test_groups_render_in_creation_order() {
        let registry = Registry::new();
        let mut router = RecordingRouter::default();

        for prefix in ["/b", "/a", "/c"] {
            registry.create_group(&mut router, prefix, |group| {
                group.get("/x", noop);
            });
        }

        let page = registry.render();
        let b = page.find(&entry("GET", "/b/x")).unwrap();
        let a = page.find(&entry("GET", "/a/x")).unwrap();
        let c = page.find(&entry("GET", "/c/x")).unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_repeated_route_renders_once() {
        let registry = Registry::new();
        let mut router = RecordingRouter::default();

        registry.create_group(&mut router, "/api", |group| {
            group.delete("/items/{id}", noop);
            group.delete("/items/{id}", noop);
            group.append(Method::DELETE, "/items/{id}", noop);
        });

        let page = registry.render();
        assert_eq!(page.matches(&entry("DELETE", "/api/items/{id}")).count(), 1);
    }

    #[test]
    fn test_group_fragment_contains_every_route() {
        let registry = Registry::new();
        let mut router = RecordingRouter::default();

        registry.create_group(&mut router, "/orders", |group| {
            group.get("/", noop).get("/{id}", noop).post("/", noop);
        });

        let fragment = registry.groups()[0].render();
        for expected in [
            entry("GET", "/orders/"),
            entry("GET", "/orders/{id}"),
            entry("POST", "/orders/"),
        ] {
            assert!(fragment.contains(&expected), "missing {expected}");
        }
        assert_eq!(fragment.matches("<li>").count(), 3);
    }

    #[test]
    fn test_clones_share_groups() {
        let registry = Registry::new();
        let view = registry.clone();
        let mut router = RecordingRouter::default();

        registry.create_group(&mut router, "/late", |group| {
            group.get("/", noop);
        });

        assert_eq!(view.groups().len(), 1);
        assert!(view.render().contains(&entry("GET", "/late/")));
    }

    #[test]
    fn test_custom_title() {
        let registry = Registry::with_title("Inventory");
        assert!(registry
            .render()
            .starts_with("<html><head><title>Inventory</title>"));
        assert_eq!(registry.title(), "Inventory");
    }
}
