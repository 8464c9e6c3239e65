//! Product identifier codec.
//!
//! Clients see identifiers as 24-character hex strings; the store keys
//! documents by a 12-byte `ObjectId`. Every handler parses the raw path
//! segment here before any store call is made.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error returned when a string is not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid ObjectId")]
pub struct InvalidIdentifier(pub String);

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(ObjectId);

impl ProductId {
    /// Parse an external identifier string.
    ///
    /// Only exactly 24 hexadecimal characters are accepted (either case).
    pub fn parse(raw: &str) -> Result<Self, InvalidIdentifier> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidIdentifier(raw.to_string()))
    }

    /// Encode as the lowercase hex form clients see.
    pub fn encode(&self) -> String {
        self.0.to_hex()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ProductId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<ProductId> for ObjectId {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl FromStr for ProductId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}
