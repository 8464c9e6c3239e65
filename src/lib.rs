//! Trendify catalog API library.
//!
//! CRUD over a MongoDB product collection plus a fixed category listing,
//! served with Axum.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
