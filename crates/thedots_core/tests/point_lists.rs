use rusqlite::Connection;
use thedots_core::db::open_db_in_memory;
use thedots_core::{
    Point, PointList, PointListService, PointListServiceError, PointRepository,
    SqlitePointListRepository, SqlitePointRepository,
};

fn service(
    conn: &Connection,
) -> PointListService<SqlitePointRepository<'_>, SqlitePointListRepository<'_>> {
    PointListService::new(
        SqlitePointRepository::try_new(conn).unwrap(),
        SqlitePointListRepository::try_new(conn).unwrap(),
    )
}

#[test]
fn creates_and_finds_list() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let list = PointList::new("corners");

    service.create_list(&list).unwrap();

    assert_eq!(service.get_list(&list.id).unwrap(), Some(list.clone()));
    assert_eq!(service.find_list_by_name("corners").unwrap(), Some(list));
}

#[test]
fn invalid_list_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.create_list(&PointList::new("")).unwrap_err();

    assert!(matches!(err, PointListServiceError::Validation(_)));
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn same_name_replaces_old_list_and_its_points() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let old = PointList::with_id("old", "shared");
    service.create_list(&old).unwrap();
    service.import_points(["1 1", "2 2"], &old.id, 10).unwrap();

    let replacement = PointList::with_id("new", "shared");
    service.create_list(&replacement).unwrap();

    assert_eq!(service.list_all().unwrap(), vec![replacement]);
    assert_eq!(service.get_list("old").unwrap(), None);
    let points = SqlitePointRepository::try_new(&conn).unwrap();
    assert_eq!(points.count_by_list("old").unwrap(), 0);
}

#[test]
fn resaving_same_list_keeps_its_points() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let list = PointList::with_id("id", "name");
    service.create_list(&list).unwrap();
    service.import_points(["1 1"], &list.id, 10).unwrap();

    service.create_list(&list).unwrap();

    assert_eq!(service.export_points(&list.id).unwrap(), "1 1");
}

#[test]
fn delete_list_removes_points() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let list = PointList::new("doomed");
    service.create_list(&list).unwrap();
    service.import_points(["1 1", "2 2"], &list.id, 10).unwrap();

    service.delete_list(&list.id).unwrap();

    assert!(service.list_all().unwrap().is_empty());
    assert_eq!(service.export_points(&list.id).unwrap(), "");
    assert!(matches!(
        service.delete_list(&list.id).unwrap_err(),
        PointListServiceError::ListNotFound(_)
    ));
}

#[test]
fn export_output_reimports_as_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let list = PointList::new("roundtrip");
    service.create_list(&list).unwrap();
    service
        .import_points(["-3 4", "10 -20", "0 0"], &list.id, 10)
        .unwrap();

    let exported = service.export_points(&list.id).unwrap();
    assert_eq!(exported, "-3 4\n10 -20\n0 0");

    let warnings = service
        .import_points(exported.lines(), &list.id, 10)
        .unwrap();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn import_into_unknown_list_is_rejected_and_stores_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service
        .import_points(["1 1", "2 2"], "ghost", 10)
        .unwrap_err();

    assert!(matches!(err, PointListServiceError::ListNotFound(id) if id == "ghost"));
    let points = SqlitePointRepository::try_new(&conn).unwrap();
    assert_eq!(points.count_by_list("ghost").unwrap(), 0);
}

#[test]
fn delete_of_unknown_list_still_clears_stray_points() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let points = SqlitePointRepository::try_new(&conn).unwrap();
    points
        .save_all(&[Point::new(1, 1, "ghost"), Point::new(2, 2, "ghost")])
        .unwrap();

    let err = service.delete_list("ghost").unwrap_err();

    assert!(matches!(err, PointListServiceError::ListNotFound(_)));
    assert_eq!(points.count_by_list("ghost").unwrap(), 0);
}

#[test]
fn failed_list_delete_keeps_points() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let list = PointList::new("guarded");
    service.create_list(&list).unwrap();
    service.import_points(["1 1", "2 2"], &list.id, 10).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER block_list_delete BEFORE DELETE ON point_lists
         BEGIN SELECT RAISE(ABORT, 'list delete blocked'); END;",
    )
    .unwrap();

    let err = service.delete_list(&list.id).unwrap_err();

    assert!(matches!(err, PointListServiceError::Repo(_)));
    assert_eq!(service.get_list(&list.id).unwrap(), Some(list.clone()));
    let points = SqlitePointRepository::try_new(&conn).unwrap();
    assert_eq!(points.count_by_list(&list.id).unwrap(), 2);
}
