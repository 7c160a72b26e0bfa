//! HTML page pieces.
//!
//! Paths and titles are written as-is: they come from code, not from requests.

use crate::routing::Route;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "STRATUS REST API";

const STYLE: &str = "*{white-space: pre;font-family:monospace;list-style-type: none;}";

/// Closes the list and the document.
pub const FOOTER: &str = "</ul></body></html>";

/// Document head plus the opening of the route list.
pub fn header(title: &str) -> String {
    format!("<html><head><title>{title}</title><style>{STYLE}</style></head><body><ul>")
}

/// Append one `<li>` for `route` mounted under `prefix`.
pub fn write_entry(out: &mut String, prefix: &str, route: &Route) {
    // `Method`'s Display ignores width, so pad the &str.
    out.push_str(&format!(
        "<li>{:>6} <a href=\"{prefix}{path}\">{prefix}{path}</a></li>",
        route.method.as_str(),
        path = route.path,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_default_header() {
        assert_eq!(
            header(DEFAULT_TITLE),
            "<html><head><title>STRATUS REST API</title><style>*{white-space: pre;font-family:monospace;list-style-type: none;}</style></head><body><ul>"
        );
    }

    #[test]
    fn test_entry_pads_method_to_six() {
        let mut out = String::new();
        write_entry(&mut out, "/api", &Route::new(Method::GET, "/users"));
        assert_eq!(out, "<li>   GET <a href=\"/api/users\">/api/users</a></li>");

        out.clear();
        write_entry(&mut out, "/api", &Route::new(Method::DELETE, "/users"));
        assert_eq!(out, "<li>DELETE <a href=\"/api/users\">/api/users</a></li>");
    }

    #[test]
    fn test_long_method_is_not_truncated() {
        let mut out = String::new();
        write_entry(&mut out, "", &Route::new(Method::OPTIONS, "/"));
        assert_eq!(out, "<li>OPTIONS <a href=\"/\">/</a></li>");
    }
}
