//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Pick the filter from `RUST_LOG`, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Timestamps come from the fmt layer (UTC, RFC 3339)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("route_index={level},tower_http={level}")
}

/// Install the global subscriber. Call once, from the binary.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("DEBUG"), "route_index=debug,tower_http=debug");
    }

    #[test]
    fn test_directives_parse() {
        assert!(EnvFilter::try_new(default_directives("warn")).is_ok());
    }
}
