//! Mapping of failures to HTTP responses.
//!
//! | error | status |
//! |---|---|
//! | malformed identifier | 400 |
//! | missing JSON content type | 422 |
//! | unreadable JSON body | status reported by the rejection (400/413/422) |
//! | field validation | 422 |
//! | unknown product | 404 |
//! | store failure | 500, details logged only |

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::{InvalidIdentifier, RepositoryError, ValidationErrors};
use crate::store::StoreError;

/// Every failure a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Carries the identifier exactly as the client wrote it.
    #[error("Product with ID {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ApiError::NotFound(id.encode()),
            RepositoryError::Store(e) => ApiError::Store(e),
        }
    }
}

impl ApiError {
    /// Convert a repository failure for the product addressed by `raw_id`.
    pub fn for_product(err: RepositoryError, raw_id: &str) -> Self {
        match err {
            RepositoryError::NotFound(_) => ApiError::NotFound(raw_id.to_string()),
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::MalformedBody(rejection) => rejection.status(),
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "detail": "Validation failed",
                "errors": errors.0,
            }),
            ApiError::MalformedBody(rejection) => json!({ "detail": rejection.body_text() }),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                json!({ "detail": "Internal server error" })
            }
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldError, ProductId};
    use axum::body::to_bytes;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_status_codes() {
        let invalid = ApiError::from(ProductId::parse("x").unwrap_err());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let validation = ApiError::from(ValidationErrors(vec![FieldError {
            field: "price",
            message: "must be greater than 0".into(),
        }]));
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let id = ProductId::from(ObjectId::new());
        let missing = ApiError::from(RepositoryError::NotFound(id));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), format!("Product with ID {} not found", id));

        let raw = "65A1B2C3D4E5F60718293A4B";
        let echoed = ApiError::for_product(RepositoryError::NotFound(ProductId::parse(raw).unwrap()), raw);
        assert_eq!(echoed.to_string(), format!("Product with ID {} not found", raw));

        let store = ApiError::from(StoreError::Unavailable("closed".into()));
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_store_error_is_opaque() {
        let response = ApiError::Store(StoreError::Unavailable("secret host".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "detail": "Internal server error" }));
        assert!(!String::from_utf8_lossy(&bytes).contains("secret host"));
    }
}
