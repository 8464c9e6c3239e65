//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file (loader.rs, --config <path>)
//!     → environment overrides (MONGO_CONNECTION_STRING, MONGO_DB_NAME,
//!       PORT, CLIENT_ORIGIN_URL, LOG_LEVEL)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::AppConfig;
pub use schema::CorsConfig;
pub use schema::DatabaseConfig;
pub use schema::ObservabilityConfig;
pub use schema::StoreBackend;
