//! Amenity catalog entry.
//!
//! Catalog rows are seeded by migrations and are read-only to the core.

use serde::{Deserialize, Serialize};

/// Store-assigned amenity identifier.
pub type AmenityId = i64;

/// Named catalog feature that parks may be tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
}
