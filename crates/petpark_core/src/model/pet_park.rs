//! Pet park domain model.
//!
//! # Responsibility
//! - Define the persisted park record and its embedded geolocation value.
//! - Provide write-path validation used by repositories.
//!
//! # Invariants
//! - `contributor_id` must be set before a park is persisted.
//! - `GeoLocation` is a `Copy` value; parks never share one by reference.
//! - Decimal coordinates keep their scale exactly (stored as canonical text).
//! - Coordinates beyond `Decimal` precision are rejected, never rounded.

use super::contributor::ContributorId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned pet park identifier.
pub type PetParkId = i64;

/// Latitude/longitude pair with exact decimal coordinates.
///
/// Serialized as decimal strings (`"44.50045"`) so no float rounding ever
/// touches the values. A coordinate needing more than the 28 significant
/// digits `Decimal` holds is rejected on input, never rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "exact_coordinate::deserialize"
    )]
    pub latitude: Option<Decimal>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::str_option::serialize",
        deserialize_with = "exact_coordinate::deserialize"
    )]
    pub longitude: Option<Decimal>,
}

/// Parses a coordinate without losing any digit of `text`.
///
/// # Errors
/// - `text` is not a decimal number.
/// - `text` has more precision than `Decimal` can represent.
pub fn parse_coordinate(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(text.trim())
}

mod exact_coordinate {
    use rust_decimal::Decimal;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| {
                super::parse_coordinate(&text).map_err(|err| {
                    D::Error::custom(format!("coordinate `{text}` is not exact: {err}"))
                })
            })
            .transpose()
    }
}

impl GeoLocation {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// Public location record owned by exactly one contributor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetPark {
    /// `None` until the first save.
    pub id: Option<PetParkId>,
    pub name: String,
    pub directions: String,
    pub state_or_province: String,
    pub country: String,
    pub geo_location: Option<GeoLocation>,
    /// Owning contributor. Required for persistence.
    pub contributor_id: Option<ContributorId>,
}

/// Validation errors for pet park write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkValidationError {
    /// Park has no owning contributor.
    MissingOwner { park_id: Option<PetParkId> },
}

impl Display for ParkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOwner { park_id: Some(id) } => {
                write!(f, "pet park {id} has no owning contributor")
            }
            Self::MissingOwner { park_id: None } => {
                write!(f, "new pet park has no owning contributor")
            }
        }
    }
}

impl Error for ParkValidationError {}

impl PetPark {
    /// Validates invariants required before persistence.
    pub fn validate(&self) -> Result<(), ParkValidationError> {
        if self.contributor_id.is_none() {
            return Err(ParkValidationError::MissingOwner { park_id: self.id });
        }
        Ok(())
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
