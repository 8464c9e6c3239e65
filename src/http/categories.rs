//! Category endpoint.

use axum::Json;

use crate::catalog::{list_categories, Category};

pub async fn get_categories() -> Json<&'static [Category]> {
    Json(list_categories())
}
