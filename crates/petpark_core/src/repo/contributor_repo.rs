//! Contributor store contract and SQLite implementation.
//!
//! # Invariants
//! - `save_contributor` inserts when `id` is `None` and updates otherwise.
//! - Deleting a contributor cascades to its parks through foreign keys.

use super::{RepoError, RepoResult};
use crate::model::contributor::{Contributor, ContributorId};
use crate::model::EntityKind;
use rusqlite::{params, Connection, OptionalExtension, Row};

const CONTRIBUTOR_SELECT_SQL: &str = "SELECT
    contributor_id,
    contributor_name,
    contributor_email
FROM contributor";

/// Keyed contributor store.
pub trait ContributorRepository {
    fn get_contributor(&self, id: ContributorId) -> RepoResult<Option<Contributor>>;
    /// All contributors ordered by id.
    fn list_contributors(&self) -> RepoResult<Vec<Contributor>>;
    /// Inserts or updates; returns the (possibly newly assigned) id.
    fn save_contributor(&self, contributor: &Contributor) -> RepoResult<ContributorId>;
    fn delete_contributor(&self, id: ContributorId) -> RepoResult<()>;
}

pub struct SqliteContributorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContributorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContributorRepository for SqliteContributorRepository<'_> {
    fn get_contributor(&self, id: ContributorId) -> RepoResult<Option<Contributor>> {
        let contributor = self
            .conn
            .query_row(
                &format!("{CONTRIBUTOR_SELECT_SQL} WHERE contributor_id = ?1;"),
                [id],
                parse_contributor_row,
            )
            .optional()?;
        Ok(contributor)
    }

    fn list_contributors(&self) -> RepoResult<Vec<Contributor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTRIBUTOR_SELECT_SQL} ORDER BY contributor_id ASC;"))?;
        let rows = stmt.query_map([], parse_contributor_row)?;
        let contributors = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(contributors)
    }

    fn save_contributor(&self, contributor: &Contributor) -> RepoResult<ContributorId> {
        let Some(id) = contributor.id else {
            self.conn.execute(
                "INSERT INTO contributor (contributor_name, contributor_email)
                 VALUES (?1, ?2);",
                params![contributor.name.as_str(), contributor.email.as_str()],
            )?;
            return Ok(self.conn.last_insert_rowid());
        };

        let changed = self.conn.execute(
            "UPDATE contributor
             SET
                contributor_name = ?1,
                contributor_email = ?2
             WHERE contributor_id = ?3;",
            params![contributor.name.as_str(), contributor.email.as_str(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: EntityKind::Contributor,
                id,
            });
        }

        Ok(id)
    }

    fn delete_contributor(&self, id: ContributorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM contributor WHERE contributor_id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: EntityKind::Contributor,
                id,
            });
        }
        Ok(())
    }
}

fn parse_contributor_row(row: &Row<'_>) -> rusqlite::Result<Contributor> {
    Ok(Contributor {
        id: Some(row.get("contributor_id")?),
        name: row.get("contributor_name")?,
        email: row.get("contributor_email")?,
    })
}
