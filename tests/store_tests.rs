use rsheetlog::{AppError, CellValue, LogAction, Row, Table, TableStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn db_in(dir: &TempDir) -> PathBuf {
    dir.path().join("sheet.sqlite")
}

fn inventory() -> Table {
    let h = headers(&["Id", "Name", "Qty", "Note"]);
    let rows = vec![
        Row::from_pairs([
            ("Id", CellValue::Number(1.0)),
            ("Name", CellValue::from("Bolt")),
            ("Qty", CellValue::Number(12.5)),
            ("Note", CellValue::Empty),
        ]),
        Row::from_pairs([
            ("Id", CellValue::Number(2.0)),
            ("Name", CellValue::from("Nut")),
            ("Qty", CellValue::Number(0.0)),
            ("Note", CellValue::from("")),
        ]),
        Row::from_pairs([
            ("Id", CellValue::from("A-3")),
            ("Name", CellValue::Empty),
            ("Qty", CellValue::from("42")),
            ("Note", CellValue::from("keeps ' and \" quotes")),
        ]),
    ];
    Table::with_rows(h, rows)
}

fn corrupt_file(path: &Path) {
    fs::write(path, "definitely not an sqlite container. ".repeat(64)).unwrap();
}

#[test]
fn update_reject_then_clear_sequence() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let h = headers(&["A", "B", "Timestamp"]);

    let t = TableStore::initialize(&db, &h).unwrap();
    assert_eq!(t.len(), 0);
    assert_eq!(t.headers(), h.as_slice());

    let mut edited = t.clone();
    edited.push_row(Row::from_pairs([("A", "x"), ("B", "y"), ("Timestamp", "")]));
    let rec = TableStore::save(&edited, &db, None).unwrap();
    assert_eq!(rec.action, LogAction::Update);

    let log = TableStore::read_log(&db).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].action, LogAction::Update);

    let empty = Table::new(h.clone());
    assert!(matches!(
        TableStore::save(&empty, &db, None),
        Err(AppError::NoValidData)
    ));
    assert_eq!(TableStore::read_log(&db).unwrap().len(), 1);

    let rec = TableStore::clear(&db, &h, None).unwrap();
    assert_eq!(rec.action, LogAction::Clear);

    let loaded = TableStore::load(&db, &h).unwrap();
    assert_eq!(loaded.len(), 0);
    assert_eq!(loaded.headers(), h.as_slice());

    let log = TableStore::read_log(&db).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].action, LogAction::Clear);
}

#[test]
fn save_then_load_reproduces_rows() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();

    TableStore::initialize(&db, t.headers()).unwrap();
    TableStore::save(&t, &db, Some("johndoe")).unwrap();

    let loaded = TableStore::load(&db, t.headers()).unwrap();
    assert_eq!(loaded, t);
}

#[test]
fn save_overwrites_instead_of_merging() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::save(&t, &db, None).unwrap();

    let mut smaller = Table::new(t.headers().to_vec());
    smaller.push_row(t.rows()[2].clone());
    TableStore::save(&smaller, &db, None).unwrap();

    let loaded = TableStore::load(&db, t.headers()).unwrap();
    assert_eq!(loaded, smaller);
}

#[test]
fn rejected_save_leaves_container_unchanged() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::save(&t, &db, None).unwrap();
    let before = fs::read(&db).unwrap();

    // keys filled, every data cell blank
    let blank = Table::with_rows(
        t.headers().to_vec(),
        vec![Row::from_pairs([("Id", "9"), ("Name", "Ghost"), ("Qty", "  ")])],
    );
    assert!(matches!(
        TableStore::save(&blank, &db, None),
        Err(AppError::NoValidData)
    ));

    assert_eq!(fs::read(&db).unwrap(), before);
    assert_eq!(TableStore::load(&db, t.headers()).unwrap(), t);
}

#[test]
fn rejected_save_on_missing_path_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let empty = Table::new(headers(&["A", "B", "C"]));

    assert!(matches!(
        TableStore::save(&empty, &db, None),
        Err(AppError::NoValidData)
    ));
    assert!(!db.exists());
}

#[test]
fn extra_cells_are_ignored_and_missing_ones_stored_empty() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let h = headers(&["A", "B", "Qty"]);
    TableStore::initialize(&db, &h).unwrap();

    let wide = Table::with_rows(
        headers(&["A", "B", "Qty", "Extra"]),
        vec![Row::from_pairs([
            ("A", CellValue::from("x")),
            ("Qty", CellValue::Number(3.0)),
            ("Extra", CellValue::from("dropped")),
        ])],
    );
    TableStore::save(&wide, &db, None).unwrap();

    let loaded = TableStore::load(&db, &h).unwrap();
    assert_eq!(loaded.headers(), h.as_slice());
    let row = &loaded.rows()[0];
    assert_eq!(row.get("A"), &CellValue::from("x"));
    assert_eq!(row.get("B"), &CellValue::Empty);
    assert_eq!(row.get("Qty"), &CellValue::Number(3.0));
    assert!(row.columns().all(|c| c != "Extra"));
}

#[test]
fn clear_always_succeeds_and_keeps_schema() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();

    // on a missing container
    TableStore::clear(&db, t.headers(), None).unwrap();
    // on an already empty table
    TableStore::clear(&db, t.headers(), None).unwrap();

    TableStore::save(&t, &db, None).unwrap();
    let rec = TableStore::clear(&db, t.headers(), Some("janesmith")).unwrap();
    assert_eq!(rec.actor, "janesmith");
    assert_eq!(rec.detail, "table cleared, 3 row(s) removed");

    let loaded = TableStore::load(&db, t.headers()).unwrap();
    assert!(loaded.is_empty());
    assert_eq!(loaded.headers(), t.headers());
    assert_eq!(TableStore::read_log(&db).unwrap().len(), 4);
}

#[test]
fn log_is_append_only() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::initialize(&db, t.headers()).unwrap();

    let mut seen = TableStore::read_log(&db).unwrap();
    assert!(seen.is_empty());

    for i in 0..5 {
        if i == 3 {
            TableStore::clear(&db, t.headers(), None).unwrap();
        } else {
            let actor = format!("user{i}");
            TableStore::save(&t, &db, Some(actor.as_str())).unwrap();
        }

        let now = TableStore::read_log(&db).unwrap();
        assert_eq!(now.len(), seen.len() + 1);
        assert_eq!(&now[..seen.len()], seen.as_slice());
        seen = now;
    }

    let actions: Vec<LogAction> = seen.iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![
            LogAction::Update,
            LogAction::Update,
            LogAction::Update,
            LogAction::Clear,
            LogAction::Update
        ]
    );
    assert_eq!(seen[0].actor, "user0");
    assert_eq!(seen[3].actor, "anonymous");
    assert_eq!(seen[0].detail, "3 row(s) saved");
}

#[test]
fn initialize_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let h = headers(&["A", "B", "Timestamp"]);

    let first = TableStore::initialize(&db, &h).unwrap();
    let bytes = fs::read(&db).unwrap();

    let second = TableStore::initialize(&db, &h).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&db).unwrap(), bytes);
    assert!(TableStore::read_log(&db).unwrap().is_empty());
}

#[test]
fn initialize_keeps_existing_table_with_other_headers() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::save(&t, &db, None).unwrap();

    let other = headers(&["X", "Y"]);
    let kept = TableStore::initialize(&db, &other).unwrap();
    assert_eq!(kept, t);

    match TableStore::schema_mismatch(&kept, &other) {
        Some(AppError::SchemaMismatch { expected, found }) => {
            assert_eq!(expected, "X, Y");
            assert_eq!(found, "Id, Name, Qty, Note");
        }
        other => panic!("expected a schema mismatch, got {other:?}"),
    }
    assert!(TableStore::schema_mismatch(&kept, t.headers()).is_none());
}

#[test]
fn initialize_rejects_bad_headers() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    for bad in [headers(&[]), headers(&["A", "A"]), headers(&["_row", "B"])] {
        assert!(matches!(
            TableStore::initialize(&db, &bad),
            Err(AppError::InvalidHeaders(_))
        ));
    }
}

#[test]
fn missing_container_loads_empty_without_creating_it() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let h = headers(&["A", "B"]);

    let t = TableStore::load(&db, &h).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.headers(), h.as_slice());
    assert!(TableStore::read_log(&db).unwrap().is_empty());
    assert!(!db.exists());
}

#[test]
fn missing_regions_are_not_errors() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    // a valid SQLite file with neither region
    rusqlite::Connection::open(&db)
        .unwrap()
        .execute_batch("CREATE TABLE unrelated (x INTEGER);")
        .unwrap();

    let h = headers(&["A", "B"]);
    assert!(TableStore::load(&db, &h).unwrap().is_empty());
    assert!(TableStore::read_log(&db).unwrap().is_empty());

    // initialize fills in both regions
    TableStore::initialize(&db, &h).unwrap();
    let conn = rusqlite::Connection::open(&db).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('main','log')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn corrupt_container_is_reported_not_replaced() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    corrupt_file(&db);
    let before = fs::read(&db).unwrap();
    let h = headers(&["A", "B"]);

    assert!(matches!(
        TableStore::initialize(&db, &h),
        Err(AppError::StorageCorrupt(_))
    ));
    assert!(matches!(
        TableStore::load(&db, &h),
        Err(AppError::StorageCorrupt(_))
    ));
    assert!(matches!(
        TableStore::read_log(&db),
        Err(AppError::StorageCorrupt(_))
    ));
    assert!(matches!(
        TableStore::clear(&db, &h, None),
        Err(AppError::StorageCorrupt(_))
    ));

    assert_eq!(fs::read(&db).unwrap(), before);
}

#[test]
fn failed_log_append_rolls_back_table_write() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::save(&t, &db, None).unwrap();

    rusqlite::Connection::open(&db)
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER no_more_log BEFORE INSERT ON log
             BEGIN SELECT RAISE(ABORT, 'log is read-only'); END;",
        )
        .unwrap();

    let mut smaller = Table::new(t.headers().to_vec());
    smaller.push_row(t.rows()[0].clone());

    assert!(matches!(
        TableStore::save(&smaller, &db, None),
        Err(AppError::LogAppendFailed(_))
    ));
    assert_eq!(TableStore::load(&db, t.headers()).unwrap(), t);
    assert_eq!(TableStore::read_log(&db).unwrap().len(), 1);
}

#[test]
fn failed_table_write_is_reported_separately() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    let t = inventory();
    TableStore::save(&t, &db, None).unwrap();

    rusqlite::Connection::open(&db)
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER frozen BEFORE DELETE ON main
             BEGIN SELECT RAISE(ABORT, 'table is frozen'); END;",
        )
        .unwrap();

    assert!(matches!(
        TableStore::save(&t, &db, None),
        Err(AppError::StorageWriteFailed(_))
    ));
    assert_eq!(TableStore::read_log(&db).unwrap().len(), 1);
}

#[test]
fn headers_differing_only_by_case_are_rejected() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);

    for bad in [headers(&["Id", "id", "Qty"]), headers(&["_ROW", "A"])] {
        assert!(matches!(
            TableStore::initialize(&db, &bad),
            Err(AppError::InvalidHeaders(_))
        ));
    }

    let t = Table::with_rows(
        headers(&["Id", "Name", "name"]),
        vec![Row::from_pairs([("Id", "1"), ("Name", "Bolt"), ("name", "bolt")])],
    );
    assert!(matches!(
        TableStore::save(&t, &db, None),
        Err(AppError::InvalidHeaders(_))
    ));
    assert!(!db.exists());
}

fn legacy_container(path: &Path) {
    rusqlite::Connection::open(path)
        .unwrap()
        .execute_batch(
            r#"CREATE TABLE main ("_row" INTEGER PRIMARY KEY, "A", "B", "Timestamp");
               INSERT INTO main VALUES (1, 'x', 'y', '2024-01-01 10:00:00');
               CREATE TABLE log (timestamp TEXT NOT NULL, action TEXT NOT NULL, detail TEXT NOT NULL);
               INSERT INTO log VALUES ('2024-01-01 10:00:00', 'Update', '1 row(s) saved');"#,
        )
        .unwrap();
}

fn zip_backups(dir: &TempDir) -> usize {
    fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".zip"))
        .count()
}

#[test]
fn legacy_log_is_read_as_is_and_migrated_on_write() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    legacy_container(&db);
    let before = fs::read(&db).unwrap();
    let h = headers(&["A", "B", "Timestamp"]);

    // reads and rejected saves leave the file alone
    assert_eq!(TableStore::load(&db, &h).unwrap().len(), 1);
    let log = TableStore::read_log(&db).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].actor, "");
    assert!(matches!(
        TableStore::save(&Table::new(h.clone()), &db, None),
        Err(AppError::NoValidData)
    ));
    assert_eq!(fs::read(&db).unwrap(), before);
    assert_eq!(zip_backups(&dir), 0);

    // the first accepted write migrates, after a safety backup
    let mut t = TableStore::load(&db, &h).unwrap();
    t.push_row(Row::from_pairs([
        ("A", CellValue::from("z")),
        ("B", CellValue::from("w")),
        ("Timestamp", CellValue::Empty),
    ]));
    TableStore::save(&t, &db, Some("johndoe")).unwrap();

    assert_eq!(zip_backups(&dir), 1);
    let log = TableStore::read_log(&db).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].actor, "");
    assert_eq!(log[1].actor, "johndoe");
    assert_eq!(TableStore::load(&db, &h).unwrap(), t);
}
