//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the keyed store capabilities consumed by the service layer.
//! - Keep SQL inside the persistence boundary.
//! - Wrap each façade call in one transaction (`unit_of_work`).
//!
//! # Invariants
//! - Park writes call `PetPark::validate()` before any SQL mutation.
//! - Repositories never open their own transactions; the unit of work owns it.
//! - Unique-constraint failures surface as `RepoError::DuplicateKey`.

pub mod amenity_repo;
pub mod contributor_repo;
mod error;
pub mod pet_park_repo;
pub mod unit_of_work;

pub use error::{RepoError, RepoResult};
