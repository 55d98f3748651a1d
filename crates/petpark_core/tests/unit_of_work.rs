use petpark_core::db::open_db_in_memory;
use petpark_core::{
    Access, Contributor, ParkServiceError, RepoError, SqliteUnitOfWork, UnitOfWork,
};
use rusqlite::Connection;

fn contributor_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM contributor;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn successful_work_is_committed() {
    let mut conn = open_db_in_memory().unwrap();
    let id = SqliteUnitOfWork::new(&mut conn)
        .run(Access::ReadWrite, |stores| -> Result<i64, RepoError> {
            stores
                .contributors()
                .save_contributor(&Contributor::new("Ann", "ann@x.io"))
        })
        .unwrap();

    assert!(id > 0);
    assert_eq!(contributor_count(&conn), 1);
}

#[test]
fn failed_work_rolls_back_earlier_writes() {
    let mut conn = open_db_in_memory().unwrap();
    let result = SqliteUnitOfWork::new(&mut conn).run(
        Access::ReadWrite,
        |stores| -> Result<(), ParkServiceError> {
            stores
                .contributors()
                .save_contributor(&Contributor::new("Ann", "ann@x.io"))?;
            Err(ParkServiceError::UnsupportedOperation("abort after insert"))
        },
    );

    assert!(matches!(
        result,
        Err(ParkServiceError::UnsupportedOperation(_))
    ));
    assert_eq!(contributor_count(&conn), 0);
}

#[test]
fn constraint_failure_rolls_back_whole_unit() {
    let mut conn = open_db_in_memory().unwrap();
    let result = SqliteUnitOfWork::new(&mut conn).run(
        Access::ReadWrite,
        |stores| -> Result<(), RepoError> {
            stores
                .contributors()
                .save_contributor(&Contributor::new("Ann", "ann@x.io"))?;
            stores
                .contributors()
                .save_contributor(&Contributor::new("Ann again", "ann@x.io"))?;
            Ok(())
        },
    );

    assert!(matches!(result, Err(RepoError::DuplicateKey(_))));
    assert_eq!(contributor_count(&conn), 0);
}

#[test]
fn read_only_work_sees_committed_rows() {
    let mut conn = open_db_in_memory().unwrap();
    let mut uow = SqliteUnitOfWork::new(&mut conn);
    uow.run(Access::ReadWrite, |stores| -> Result<i64, RepoError> {
        stores
            .contributors()
            .save_contributor(&Contributor::new("Ann", "ann@x.io"))
    })
    .unwrap();

    let names = uow
        .run(Access::ReadOnly, |stores| -> Result<Vec<String>, RepoError> {
            Ok(stores
                .contributors()
                .list_contributors()?
                .into_iter()
                .map(|contributor| contributor.name)
                .collect())
        })
        .unwrap();
    assert_eq!(names, vec!["Ann".to_string()]);
}
