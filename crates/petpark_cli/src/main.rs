//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `petpark_core` linkage and migrations without any transport.
//! - Keep output deterministic for quick local sanity checks.

use petpark_core::db::open_db_in_memory;
use petpark_core::{AmenityRepository, SqliteAmenityRepository};
use std::collections::BTreeSet;
use std::process::ExitCode;

const PROBE_AMENITIES: [&str; 2] = ["wifi", "dog friendly"];

fn main() -> ExitCode {
    println!("petpark_core ping={}", petpark_core::ping());
    println!("petpark_core version={}", petpark_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("petpark_core db=error {err}");
            return ExitCode::FAILURE;
        }
    };

    let names: BTreeSet<String> = PROBE_AMENITIES.iter().map(|name| name.to_string()).collect();
    match SqliteAmenityRepository::new(&conn).find_all_by_name_in(&names) {
        Ok(found) => {
            println!("petpark_core catalog_probe={}/{}", found.len(), names.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("petpark_core catalog=error {err}");
            ExitCode::FAILURE
        }
    }
}
