//! Contributor domain model.
//!
//! # Invariants
//! - `email` is unique across contributors; uniqueness is enforced by the
//!   store, not here.
//! - Owned parks are not embedded; see `graph::ParkGraph::parks_of`.

use serde::{Deserialize, Serialize};

/// Store-assigned contributor identifier.
pub type ContributorId = i64;

/// Registered submitter that owns zero or more pet parks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// `None` until the first save.
    pub id: Option<ContributorId>,
    pub name: String,
    pub email: String,
}

impl Contributor {
    /// Creates an unpersisted contributor.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
