//! `axum::Router` behind the routing seam.
//!
//! # Responsibilities
//! - Register each group's routes on the joined path (prefix + path)
//! - Translate (method, path, handler) into `Router::route`
//!
//! # Design Decisions
//! - Groups are merged, not nested: the served URL is exactly the page's href,
//!   including a trailing slash for routes registered at "/"
//! - Methods without a `MethodFilter` are served through `any` behind a method guard
//! - Registration failures are axum's: overlapping routes and invalid paths panic
//!   at build time

use axum::extract::Request;
use axum::handler::Handler;
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::IntoResponse;
use axum::routing::{any, on, MethodFilter, MethodRouter};
use axum::Router;

use crate::routing::group::{GroupFactory, RouteTarget};

/// Builds an `axum::Router` out of prefixed groups.
#[derive(Debug)]
pub struct AxumRouter<S = ()> {
    router: Router<S>,
}

impl<S> AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::from_router(Router::new())
    }

    /// Continue building on top of an existing router.
    pub fn from_router(router: Router<S>) -> Self {
        Self { router }
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

impl<S> Default for AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> GroupFactory for AxumRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Group = AxumGroup<S>;

    fn with_group<F>(&mut self, prefix: &str, configure: F)
    where
        F: FnOnce(&mut Self::Group),
    {
        let mut group = AxumGroup::new(prefix);
        configure(&mut group);

        let router = std::mem::replace(&mut self.router, Router::new());
        self.router = router.merge(group.router);
    }
}

/// One prefixed group under construction.
#[derive(Debug)]
pub struct AxumGroup<S = ()> {
    prefix: String,
    router: Router<S>,
}

impl<S> AxumGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            router: Router::new(),
        }
    }
}

impl<S, H, T> RouteTarget<H, T> for AxumGroup<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    fn register(&mut self, method: Method, path: &str, handler: H) {
        let full_path = format!("{}{path}", self.prefix);
        tracing::trace!(method = %method, path = %full_path, "Registering route");

        let method_router = match MethodFilter::try_from(method.clone()) {
            Ok(filter) => on(filter, handler),
            Err(_) => guarded(method, handler),
        };

        let router = std::mem::replace(&mut self.router, Router::new());
        self.router = router.route(&full_path, method_router);
    }
}

/// Serve `handler` for `method` only; other methods get 405.
fn guarded<H, T, S>(method: Method, handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    any(handler).route_layer(middleware::from_fn(move |req: Request, next: Next| {
        let allowed = *req.method() == method;
        async move {
            if allowed {
                next.run(req).await
            } else {
                StatusCode::METHOD_NOT_ALLOWED.into_response()
            }
        }
    }))
}
