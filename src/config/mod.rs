//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → routing::validation (table built once as a semantic check)
//!     → ConsoleConfig (validated, immutable)
//!     → composition root builds the Router from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - The fallback field has no default: unmatched-path behavior is a
//!   deployment decision, not a library guess
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ConsoleConfig, FallbackConfig, ObservabilityConfig};
