//! Park-centric transfer shape.

use crate::model::contributor::ContributorId;
use crate::model::pet_park::{GeoLocation, PetParkId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Pet park with its owner summary and amenity names.
///
/// Inbound `amenities` are catalog names to attach; names the catalog does
/// not know are dropped. `contributor` is output-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetParkData {
    pub pet_park_id: Option<PetParkId>,
    pub park_name: String,
    pub directions: String,
    pub state_or_province: String,
    pub country: String,
    pub geo_location: Option<GeoLocation>,
    pub contributor: Option<ParkContributor>,
    pub amenities: BTreeSet<String>,
}

impl PetParkData {
    /// Targets an existing park, e.g. from a path parameter.
    pub fn with_park_id(mut self, park_id: PetParkId) -> Self {
        self.pet_park_id = Some(park_id);
        self
    }
}

/// Contributor nested under a park, without its park set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParkContributor {
    pub contributor_id: Option<ContributorId>,
    pub contributor_name: String,
    pub contributor_email: String,
}
