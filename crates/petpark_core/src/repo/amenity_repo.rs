//! Read-only amenity catalog store.
//!
//! # Invariants
//! - Name lookups return matches only; unmatched names never error, however
//!   many are requested.
//! - Catalog name matching follows the column's `NOCASE` collation.

use super::RepoResult;
use crate::model::amenity::{Amenity, AmenityId};
use crate::model::pet_park::PetParkId;
use rusqlite::{params_from_iter, Connection, Row};
use std::collections::{BTreeMap, BTreeSet};

/// Names bound per `IN (...)` statement; well under SQLite's variable limit.
const NAME_LOOKUP_CHUNK: usize = 500;

/// Amenity catalog lookups.
pub trait AmenityRepository {
    /// Resolves catalog rows whose name is in `names`, ordered by name.
    ///
    /// Each requested name is trimmed, then compared case-insensitively, so
    /// `" WiFi "` resolves to the catalog's `wifi`. Returned rows carry the
    /// catalog spelling and appear once even when several requested
    /// spellings hit the same row.
    fn find_all_by_name_in(&self, names: &BTreeSet<String>) -> RepoResult<Vec<Amenity>>;
    /// Amenities currently joined to a persisted park.
    fn list_amenities_for_park(&self, park_id: PetParkId) -> RepoResult<Vec<Amenity>>;
}

pub struct SqliteAmenityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAmenityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AmenityRepository for SqliteAmenityRepository<'_> {
    fn find_all_by_name_in(&self, names: &BTreeSet<String>) -> RepoResult<Vec<Amenity>> {
        let names: Vec<&str> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut matched: BTreeMap<AmenityId, Amenity> = BTreeMap::new();
        for chunk in names.chunks(NAME_LOOKUP_CHUNK) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let mut stmt = self.conn.prepare(&format!(
                "SELECT amenity_id, amenity
                 FROM amenity
                 WHERE amenity IN ({placeholders});"
            ))?;
            let rows = stmt.query_map(params_from_iter(chunk), parse_amenity_row)?;
            for amenity in rows {
                let amenity = amenity?;
                matched.entry(amenity.id).or_insert(amenity);
            }
        }

        let mut amenities: Vec<Amenity> = matched.into_values().collect();
        amenities.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(amenities)
    }

    fn list_amenities_for_park(&self, park_id: PetParkId) -> RepoResult<Vec<Amenity>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.amenity_id, a.amenity
             FROM pet_park_amenity ppa
             INNER JOIN amenity a ON a.amenity_id = ppa.amenity_id
             WHERE ppa.pet_park_id = ?1
             ORDER BY a.amenity ASC;",
        )?;
        let rows = stmt.query_map([park_id], parse_amenity_row)?;
        let amenities = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(amenities)
    }
}

fn parse_amenity_row(row: &Row<'_>) -> rusqlite::Result<Amenity> {
    Ok(Amenity {
        id: row.get("amenity_id")?,
        name: row.get("amenity")?,
    })
}
