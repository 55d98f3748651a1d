//! Pet park store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist park rows and the park-owned `pet_park_amenity` join.
//! - Load parks by id or by owning contributor.
//!
//! # Invariants
//! - Write paths call `PetPark::validate()` before SQL mutations.
//! - `save_park` replaces the park's join rows with exactly `amenity_ids`.
//! - Coordinates are stored as canonical decimal text and parsed back
//!   without loss; unparsable values are rejected as invalid data.

use super::{RepoError, RepoResult};
use crate::model::amenity::AmenityId;
use crate::model::contributor::ContributorId;
use crate::model::pet_park::{parse_coordinate, GeoLocation, PetPark, PetParkId};
use crate::model::EntityKind;
use rust_decimal::Decimal;
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;

const PARK_SELECT_SQL: &str = "SELECT
    pet_park_id,
    contributor_id,
    park_name,
    directions,
    state_or_province,
    country,
    geo_latitude,
    geo_longitude
FROM pet_park";

/// Keyed pet park store.
///
/// There is no delete: parks leave the store only by contributor cascade.
pub trait PetParkRepository {
    fn get_park(&self, id: PetParkId) -> RepoResult<Option<PetPark>>;
    /// Parks owned by one contributor, ordered by id.
    fn list_parks_by_contributor(&self, contributor_id: ContributorId)
        -> RepoResult<Vec<PetPark>>;
    /// Inserts or updates the park row and replaces its amenity join rows.
    fn save_park(
        &self,
        park: &PetPark,
        amenity_ids: &BTreeSet<AmenityId>,
    ) -> RepoResult<PetParkId>;
}

pub struct SqlitePetParkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetParkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PetParkRepository for SqlitePetParkRepository<'_> {
    fn get_park(&self, id: PetParkId) -> RepoResult<Option<PetPark>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARK_SELECT_SQL} WHERE pet_park_id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_park_row(row)?));
        }
        Ok(None)
    }

    fn list_parks_by_contributor(
        &self,
        contributor_id: ContributorId,
    ) -> RepoResult<Vec<PetPark>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PARK_SELECT_SQL}
             WHERE contributor_id = ?1
             ORDER BY pet_park_id ASC;"
        ))?;
        let mut rows = stmt.query([contributor_id])?;
        let mut parks = Vec::new();
        while let Some(row) = rows.next()? {
            parks.push(parse_park_row(row)?);
        }
        Ok(parks)
    }

    fn save_park(
        &self,
        park: &PetPark,
        amenity_ids: &BTreeSet<AmenityId>,
    ) -> RepoResult<PetParkId> {
        park.validate()?;

        let geo = park.geo_location.unwrap_or_default();
        let latitude = geo.latitude.map(|value| value.to_string());
        let longitude = geo.longitude.map(|value| value.to_string());

        let park_id = match park.id {
            None => {
                self.conn.execute(
                    "INSERT INTO pet_park (
                        contributor_id,
                        park_name,
                        directions,
                        state_or_province,
                        country,
                        geo_latitude,
                        geo_longitude
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                    params![
                        park.contributor_id,
                        park.name.as_str(),
                        park.directions.as_str(),
                        park.state_or_province.as_str(),
                        park.country.as_str(),
                        latitude,
                        longitude,
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE pet_park
                     SET
                        contributor_id = ?1,
                        park_name = ?2,
                        directions = ?3,
                        state_or_province = ?4,
                        country = ?5,
                        geo_latitude = ?6,
                        geo_longitude = ?7
                     WHERE pet_park_id = ?8;",
                    params![
                        park.contributor_id,
                        park.name.as_str(),
                        park.directions.as_str(),
                        park.state_or_province.as_str(),
                        park.country.as_str(),
                        latitude,
                        longitude,
                        id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound {
                        kind: EntityKind::PetPark,
                        id,
                    });
                }
                id
            }
        };

        self.conn.execute(
            "DELETE FROM pet_park_amenity WHERE pet_park_id = ?1;",
            [park_id],
        )?;
        for amenity_id in amenity_ids {
            self.conn.execute(
                "INSERT INTO pet_park_amenity (pet_park_id, amenity_id) VALUES (?1, ?2);",
                params![park_id, amenity_id],
            )?;
        }

        Ok(park_id)
    }
}

fn parse_park_row(row: &Row<'_>) -> RepoResult<PetPark> {
    let latitude = parse_decimal(row.get("geo_latitude")?, "geo_latitude")?;
    let longitude = parse_decimal(row.get("geo_longitude")?, "geo_longitude")?;
    let geo_location = if latitude.is_none() && longitude.is_none() {
        None
    } else {
        Some(GeoLocation {
            latitude,
            longitude,
        })
    };

    Ok(PetPark {
        id: Some(row.get("pet_park_id")?),
        name: row.get("park_name")?,
        directions: row.get("directions")?,
        state_or_province: row.get("state_or_province")?,
        country: row.get("country")?,
        geo_location,
        contributor_id: Some(row.get("contributor_id")?),
    })
}

fn parse_decimal(value: Option<String>, column: &str) -> RepoResult<Option<Decimal>> {
    value
        .map(|text| {
            parse_coordinate(&text).map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid decimal value `{text}` in pet_park.{column}"
                ))
            })
        })
        .transpose()
}
