//! Contributor-centric transfer shape.

use crate::model::contributor::ContributorId;
use crate::model::pet_park::{GeoLocation, PetParkId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contributor with a summary of every park it owns.
///
/// `pet_parks` is output-only and ignored on inbound saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributorData {
    pub contributor_id: Option<ContributorId>,
    pub contributor_name: String,
    pub contributor_email: String,
    /// Ordered by park id.
    pub pet_parks: Vec<ParkSummary>,
}

impl ContributorData {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            contributor_name: name.into(),
            contributor_email: email.into(),
            ..Self::default()
        }
    }

    /// Targets an existing contributor, e.g. from a path parameter.
    pub fn with_contributor_id(mut self, contributor_id: ContributorId) -> Self {
        self.contributor_id = Some(contributor_id);
        self
    }
}

/// Park fields nested under a contributor, without the owner back-reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkSummary {
    pub pet_park_id: Option<PetParkId>,
    pub park_name: String,
    pub directions: String,
    pub state_or_province: String,
    pub country: String,
    pub geo_location: Option<GeoLocation>,
    pub amenities: BTreeSet<String>,
}
