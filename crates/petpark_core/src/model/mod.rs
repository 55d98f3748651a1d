//! Domain model for contributors, pet parks and the amenity catalog.
//!
//! # Responsibility
//! - Define the persisted entity shapes used by repositories and services.
//! - Hold relationships as identifiers, never as embedded references.
//!
//! # Invariants
//! - Entities have no id until the store assigns one on first save.
//! - Every persisted `PetPark` carries a `contributor_id`.
//! - In-memory relationship edges live in `graph::ParkGraph` only.

use std::fmt::{Display, Formatter};

pub mod amenity;
pub mod contributor;
pub mod graph;
pub mod pet_park;

/// Entity families resolved by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Contributor,
    PetPark,
}

impl EntityKind {
    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::PetPark => "pet park",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
