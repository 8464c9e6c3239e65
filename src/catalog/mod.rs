//! Product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! raw id string ──id.rs──▶ ProductId
//! JSON payload ──mapper.rs──▶ NewProduct / ProductPatch
//!     → repository.rs (list/get/insert/update/delete)
//!     → store (DocumentStore)
//!     ← Document ──mapper.rs──▶ Product
//!
//! category.rs: fixed in-memory listing, no store access
//! seed.rs: initial catalog used by the `seed` binary
//! ```

pub mod category;
pub mod id;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod seed;

pub use category::{list_categories, Category};
pub use id::{InvalidIdentifier, ProductId};
pub use mapper::{FieldError, ValidationErrors};
pub use model::{CreateProductRequest, NewProduct, Patch, Product, ProductPatch, UpdateProductRequest};
pub use repository::{ProductRepository, RepositoryError, LIST_LIMIT};
