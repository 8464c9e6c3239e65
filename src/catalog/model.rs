//! Product shapes: wire requests, validated values, stored documents and
//! the response representation.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::id::ProductId;

/// Product as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub sizes: Vec<String>,
}

/// A fully validated product without identifier, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub sizes: Vec<String>,
}

/// Product document exactly as persisted in the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredProduct {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub sizes: Vec<String>,
}

impl From<StoredProduct> for Product {
    fn from(stored: StoredProduct) -> Self {
        Self {
            id: ProductId::from(stored.id).encode(),
            name: stored.name,
            price: stored.price,
            description: stored.description,
            category: stored.category,
            image_url: stored.image_url,
            sizes: stored.sizes,
        }
    }
}

/// Create payload as received.
///
/// Every field is optional at the serde level so that missing fields can be
/// reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub sizes: Option<Vec<String>>,
}

/// Update payload as received. Any subset of fields may be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
    #[serde(default)]
    pub image_url: Patch<String>,
    #[serde(default)]
    pub sizes: Patch<Vec<String>>,
}

/// Presence-tracking field for partial updates.
///
/// `Absent` is produced by `#[serde(default)]` when the key is missing,
/// `Null` when the key is present with a JSON `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// The supplied value, if any. `Null` counts as not supplied.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}

/// Validated partial update. `None` means "leave the stored field alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub sizes: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
            && self.sizes.is_none()
    }
}
