//! Transaction-scoped unit of work over the three registry stores.
//!
//! # Responsibility
//! - Hand one consistent set of repositories to a façade call.
//! - Commit when the call succeeds; roll back when it returns an error.
//!
//! # Invariants
//! - Nothing written inside a failed unit of work is visible afterwards.
//! - Writers take the SQLite write lock up front (`IMMEDIATE`).

use super::amenity_repo::{AmenityRepository, SqliteAmenityRepository};
use super::contributor_repo::{ContributorRepository, SqliteContributorRepository};
use super::pet_park_repo::{PetParkRepository, SqlitePetParkRepository};
use super::RepoError;
use log::warn;
use rusqlite::{Connection, TransactionBehavior};

/// Declared access mode of one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Repositories visible inside one unit of work.
pub trait ParkStores {
    fn contributors(&self) -> &dyn ContributorRepository;
    fn parks(&self) -> &dyn PetParkRepository;
    fn amenities(&self) -> &dyn AmenityRepository;
}

/// Runs closures atomically against [`ParkStores`].
pub trait UnitOfWork {
    /// Executes `work`, committing on `Ok` and rolling back on `Err`.
    fn run<T, E, F>(&mut self, access: Access, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn ParkStores) -> Result<T, E>,
        E: From<RepoError>;
}

/// SQLite repositories bound to one open transaction.
pub struct SqliteStores<'conn> {
    contributors: SqliteContributorRepository<'conn>,
    parks: SqlitePetParkRepository<'conn>,
    amenities: SqliteAmenityRepository<'conn>,
}

impl<'conn> SqliteStores<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            contributors: SqliteContributorRepository::new(conn),
            parks: SqlitePetParkRepository::new(conn),
            amenities: SqliteAmenityRepository::new(conn),
        }
    }
}

impl ParkStores for SqliteStores<'_> {
    fn contributors(&self) -> &dyn ContributorRepository {
        &self.contributors
    }

    fn parks(&self) -> &dyn PetParkRepository {
        &self.parks
    }

    fn amenities(&self) -> &dyn AmenityRepository {
        &self.amenities
    }
}

/// Unit of work backed by SQLite transactions on a migrated connection.
pub struct SqliteUnitOfWork<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteUnitOfWork<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl UnitOfWork for SqliteUnitOfWork<'_> {
    fn run<T, E, F>(&mut self, access: Access, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn ParkStores) -> Result<T, E>,
        E: From<RepoError>,
    {
        let behavior = match access {
            Access::ReadOnly => TransactionBehavior::Deferred,
            Access::ReadWrite => TransactionBehavior::Immediate,
        };
        let tx = self
            .conn
            .transaction_with_behavior(behavior)
            .map_err(RepoError::from)?;

        let outcome = {
            let stores = SqliteStores::new(&tx);
            work(&stores)
        };

        match outcome {
            Ok(value) => {
                tx.commit().map_err(RepoError::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(
                        "event=uow_rollback module=repo status=error error={rollback_err}"
                    );
                }
                Err(err)
            }
        }
    }
}
