//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → products.rs / categories.rs / root.rs (handlers)
//!     → error.rs (failure → status + JSON body)
//!     → Send to client
//! ```

pub mod categories;
pub mod cors;
pub mod error;
pub mod products;
pub mod request;
pub mod root;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
