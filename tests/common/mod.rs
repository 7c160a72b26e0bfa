//! Shared helpers for integration tests.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// Expected `<li>` for a route mounted at `href`.
pub fn entry(method: &str, href: &str) -> String {
    format!("<li>{method:>6} <a href=\"{href}\">{href}</a></li>")
}

/// Every `<li>...</li>` in `page`, in page order.
#[allow(dead_code)]
pub fn entries(page: &str) -> Vec<String> {
    page.split("<li>")
        .skip(1)
        .map(|rest| {
            let end = rest.find("</li>").expect("unterminated <li>");
            format!("<li>{}</li>", &rest[..end])
        })
        .collect()
}

/// Entries as a set, for comparisons that ignore intra-group order.
#[allow(dead_code)]
pub fn entry_set(page: &str) -> HashSet<String> {
    entries(page).into_iter().collect()
}

/// GET `uri` in-process and return the body as text.
#[allow(dead_code)]
pub async fn get_page(router: &Router, uri: &str) -> String {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// (method, href) for every entry on `page`.
#[allow(dead_code)]
pub fn links(page: &str) -> Vec<(Method, String)> {
    entries(page)
        .iter()
        .map(|li| {
            let inner = &li["<li>".len()..];
            let method = inner[..6].trim();
            let href_start = inner.find("href=\"").expect("entry without href") + "href=\"".len();
            let href_len = inner[href_start..].find('"').expect("unterminated href");
            (
                Method::from_bytes(method.as_bytes()).expect("bad method"),
                inner[href_start..href_start + href_len].to_string(),
            )
        })
        .collect()
}

/// Send `method uri` in-process and return the status.
#[allow(dead_code)]
pub async fn status_of(router: &Router, method: Method, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap().status()
}
