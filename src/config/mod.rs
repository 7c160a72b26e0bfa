//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → CLI overrides applied by the binary
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file is fine
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{IndexConfig, ListenerConfig, ObservabilityConfig, ServiceConfig};
pub use validation::{validate_config, ValidationError};
