//! Embedded registry schema steps.
//!
//! Step 1 lays down contributors, parks, the amenity catalog and the
//! park/amenity join. Step 2 seeds the catalog. The database records the
//! last applied step in `PRAGMA user_version`; a reopen runs only the steps
//! after it, all inside one transaction.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "init",
        sql: include_str!("0001_init.sql"),
    },
    Migration {
        version: 2,
        name: "amenity_catalog",
        sql: include_str!("0002_amenity_catalog.sql"),
    },
];

/// Schema step this build brings a database up to.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Runs every step after the database's recorded version.
///
/// A failing step rolls the whole batch back and is reported as
/// [`DbError::MigrationFailed`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let recorded = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();
    if recorded > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: recorded,
            latest_supported: latest,
        });
    }

    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > recorded)
        .collect();
    let Some(last) = pending.last() else {
        return Ok(());
    };
    let target = last.version;

    let tx = conn.transaction()?;
    for migration in &pending {
        tx.execute_batch(migration.sql)
            .and_then(|()| {
                tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))
            })
            .map_err(|source| DbError::MigrationFailed {
                version: migration.version,
                name: migration.name,
                source,
            })?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={recorded} to_version={target} steps={}",
        pending.len()
    );
    Ok(())
}
