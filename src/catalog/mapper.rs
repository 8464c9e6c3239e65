//! Translation between wire payloads and stored documents.
//!
//! # Data Flow
//! ```text
//! CreateProductRequest ─validate_create─▶ NewProduct ──insert_document──▶ Document (no _id)
//! UpdateProductRequest ─validate_update─▶ ProductPatch ─set_document─▶ Document ($set body)
//! Document ──────────────decode_product──────────────▶ Product (id as hex string)
//! ```
//!
//! Validation happens entirely here so that a rejected payload never reaches
//! the repository.

use std::fmt;

use mongodb::bson::{self, doc, Document};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::model::{
    CreateProductRequest, NewProduct, Product, ProductPatch, StoredProduct, UpdateProductRequest,
};

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn check_price(price: f64, errors: &mut ValidationErrors) {
    if !price.is_finite() || price <= 0.0 {
        errors.push("price", "must be greater than 0");
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    if name.is_empty() {
        errors.push("name", "must not be empty");
    }
}

fn required<T>(value: Option<T>, field: &'static str, errors: &mut ValidationErrors) -> Option<T> {
    if value.is_none() {
        errors.push(field, "field required");
    }
    value
}

/// Validate a create payload. Every field is required.
pub fn validate_create(req: CreateProductRequest) -> Result<NewProduct, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(req.name, "name", &mut errors);
    let price = required(req.price, "price", &mut errors);
    let description = required(req.description, "description", &mut errors);
    let category = required(req.category, "category", &mut errors);
    let image_url = required(req.image_url, "imageUrl", &mut errors);
    let sizes = required(req.sizes, "sizes", &mut errors);

    if let Some(name) = &name {
        check_name(name, &mut errors);
    }
    if let Some(price) = price {
        check_price(price, &mut errors);
    }

    match (name, price, description, category, image_url, sizes) {
        (Some(name), Some(price), Some(description), Some(category), Some(image_url), Some(sizes)) => {
            errors.into_result(|| NewProduct {
                name,
                price,
                description,
                category,
                image_url,
                sizes,
            })
        }
        _ => Err(errors),
    }
}

/// Validate an update payload, keeping only the fields that carry a value.
pub fn validate_update(req: UpdateProductRequest) -> Result<ProductPatch, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let patch = ProductPatch {
        name: req.name.into_value(),
        price: req.price.into_value(),
        description: req.description.into_value(),
        category: req.category.into_value(),
        image_url: req.image_url.into_value(),
        sizes: req.sizes.into_value(),
    };

    if let Some(name) = &patch.name {
        check_name(name, &mut errors);
    }
    if let Some(price) = patch.price {
        check_price(price, &mut errors);
    }

    errors.into_result(|| patch)
}

/// Build the document to insert. `_id` is left for the store to assign.
pub fn insert_document(product: &NewProduct) -> Document {
    doc! {
        "name": product.name.as_str(),
        "price": product.price,
        "description": product.description.as_str(),
        "category": product.category.as_str(),
        "imageUrl": product.image_url.as_str(),
        "sizes": product.sizes.clone(),
    }
}

/// Build the `$set` body of a partial update. Only supplied fields appear.
pub fn set_document(patch: &ProductPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.as_str());
    }
    if let Some(category) = &patch.category {
        set.insert("category", category.as_str());
    }
    if let Some(image_url) = &patch.image_url {
        set.insert("imageUrl", image_url.as_str());
    }
    if let Some(sizes) = &patch.sizes {
        set.insert("sizes", sizes.clone());
    }
    set
}

/// Decode a stored document into the client representation.
pub fn decode_product(document: Document) -> Result<Product, bson::de::Error> {
    let stored: StoredProduct = bson::from_document(document)?;
    Ok(Product::from(stored))
}
