//! Core domain logic for the pet park registry.
//! This crate is the single source of truth for ownership and amenity invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod status;
pub mod transfer;

pub use logging::{init_logging, logging_status, LogConfig};
pub use model::amenity::{Amenity, AmenityId};
pub use model::contributor::{Contributor, ContributorId};
pub use model::graph::{AmenityKey, ContributorKey, ParkGraph, ParkKey};
pub use model::pet_park::{
    parse_coordinate, GeoLocation, ParkValidationError, PetPark, PetParkId,
};
pub use model::EntityKind;
pub use repo::amenity_repo::{AmenityRepository, SqliteAmenityRepository};
pub use repo::contributor_repo::{ContributorRepository, SqliteContributorRepository};
pub use repo::pet_park_repo::{PetParkRepository, SqlitePetParkRepository};
pub use repo::unit_of_work::{Access, ParkStores, SqliteStores, SqliteUnitOfWork, UnitOfWork};
pub use repo::{RepoError, RepoResult};
pub use service::park_service::ParkService;
pub use service::{ErrorKind, ParkServiceError, ServiceResult};
pub use status::{status_for, ErrorMessage, ErrorStatus};
pub use transfer::contributor_data::{ContributorData, ParkSummary};
pub use transfer::pet_park_data::{ParkContributor, PetParkData};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
