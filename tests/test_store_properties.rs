use tabledb::{ColumnType, DuplicateTablePolicy, Error, Row, StoreConfig, TableStore};

const NO_COLUMNS: [&str; 0] = [];

/// name TEXT, age INTEGER, city TEXT with a handful of rows
fn people() -> TableStore {
    let mut store = TableStore::new();
    store
        .create_table(
            "people",
            [
                ("name", ColumnType::Text),
                ("age", ColumnType::Integer),
                ("city", ColumnType::Text),
            ],
        )
        .unwrap();

    for row in [
        ["Ann", "30", "Oslo"],
        ["Ben", "41", "Rome"],
        ["Cid", "30", "Oslo"],
        ["Dee", "-5", ""],
        ["Eli", "+30", "Oslo"],
    ] {
        store.insert("people", row).unwrap();
    }
    store
}

fn assert_arity(store: &TableStore, table: &str) {
    let width = store.get_table(table).unwrap().schema().column_count();
    for row in store.select(table, &NO_COLUMNS) {
        assert_eq!(row.len(), width);
    }
}

#[test]
fn test_arity_holds_after_every_operation() {
    let mut store = people();
    assert_arity(&store, "people");

    let _ = store.insert("people", ["Fay"]);
    assert_arity(&store, "people");
    let _ = store.insert("people", ["Fay", "1", "Nice", "extra"]);
    assert_arity(&store, "people");

    store.update("people", "city", "Bern").unwrap();
    assert_arity(&store, "people");

    store.remove("people", "age", "30").unwrap();
    assert_arity(&store, "people");
}

#[test]
fn test_failed_insert_changes_nothing() {
    let mut store = people();
    let before = store.select("people", &NO_COLUMNS);

    for values in [
        vec!["Fay"],
        vec![],
        vec!["Fay", "1", "Nice", "extra"],
        vec!["Fay", "1.5", "Nice"],
        vec!["Fay", " 1", "Nice"],
        vec!["Fay", "", "Nice"],
    ] {
        assert!(store.insert("people", values).is_err());
    }

    assert_eq!(store.select("people", &NO_COLUMNS), before);
}

#[test]
fn test_type_gate() {
    let mut store = people();

    for bad in ["twenty", "1e3", "0x10", "12 ", "--3", "+", "", "3.0"] {
        assert!(
            matches!(
                store.insert("people", ["X", bad, "Y"]),
                Err(Error::TypeMismatch { .. })
            ),
            "expected type mismatch for {:?}",
            bad
        );
    }

    for good in ["0", "-0", "+7", "007", "99999999999999999999999"] {
        assert!(store.insert("people", ["X", good, "Y"]).is_ok(), "{:?}", good);
    }

    // Text columns take anything.
    assert!(store.insert("people", ["", "1", "  "]).is_ok());
}

#[test]
fn test_type_gate_reports_first_bad_column() {
    let mut store = TableStore::new();
    store
        .create_table("pairs", [("a", ColumnType::Integer), ("b", ColumnType::Integer)])
        .unwrap();
    store.insert("pairs", ["1", "2"]).unwrap();

    assert_eq!(
        store.insert("pairs", ["x", "y"]),
        Err(Error::TypeMismatch {
            column: "a".to_string(),
            value: "x".to_string(),
            expected: ColumnType::Integer,
        })
    );
    assert!(matches!(
        store.insert("pairs", ["3", "y"]),
        Err(Error::TypeMismatch { ref column, .. }) if column == "b"
    ));
    assert_eq!(store.row_count("pairs"), Ok(1));
}

#[test]
fn test_arity_is_checked_before_type() {
    let mut store = people();
    assert!(matches!(
        store.insert("people", ["X", "not a number"]),
        Err(Error::ArityMismatch {
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[test]
fn test_projection() {
    let store = people();
    let full = store.select("people", &NO_COLUMNS);
    assert_eq!(full.len(), 5);
    assert_eq!(full[0], Row::from(vec!["Ann", "30", "Oslo"]));
    assert_eq!(full[4], Row::from(vec!["Eli", "+30", "Oslo"]));

    let ages = store.select("people", &["age"]);
    for (projected, row) in ages.iter().zip(&full) {
        assert_eq!(projected.values(), [row.get(1).unwrap()]);
    }

    let reordered = store.select("people", &["city", "name"]);
    assert_eq!(reordered[1], Row::from(vec!["Rome", "Ben"]));

    // Unknown names are skipped, not errors.
    let partial = store.select("people", &["nope", "name"]);
    assert_eq!(partial[2], Row::from(vec!["Cid"]));
    assert_eq!(partial.len(), 5);
}

#[test]
fn test_select_unknown_table_is_empty() {
    let store = people();
    assert!(store.select("ghosts", &NO_COLUMNS).is_empty());
    assert!(store.select("ghosts", &["name"]).is_empty());
    assert_eq!(
        store.try_select("ghosts", &NO_COLUMNS),
        Err(Error::TableNotFound("ghosts".to_string()))
    );
}

#[test]
fn test_remove_is_exact_and_stable() {
    let mut store = people();

    assert_eq!(store.remove("people", "age", "30"), Ok(2));

    let remaining = store.select("people", &NO_COLUMNS);
    let names: Vec<&str> = remaining.iter().map(|r| r.get(0).unwrap()).collect();
    // "+30" survives: matching is on stored text.
    assert_eq!(names, vec!["Ben", "Dee", "Eli"]);
    assert!(remaining.iter().all(|r| r.get(1) != Some("30")));

    assert_eq!(store.remove("people", "city", ""), Ok(1));
    assert_eq!(store.remove("people", "city", "Atlantis"), Ok(0));
    assert_eq!(store.row_count("people"), Ok(2));
}

#[test]
fn test_update_breadth_without_type_check() {
    let mut store = people();

    assert_eq!(store.update("people", "age", "not a number"), Ok(5));
    let rows = store.select("people", &NO_COLUMNS);
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.get(1) == Some("not a number")));
    // Other columns untouched.
    assert_eq!(rows[1], Row::from(vec!["Ben", "not a number", "Rome"]));
}

#[test]
fn test_errors_are_distinguishable() {
    let mut store = people();

    assert!(matches!(
        store.insert("ghosts", ["a"]),
        Err(Error::TableNotFound(_))
    ));
    assert!(matches!(
        store.update("ghosts", "age", "1"),
        Err(Error::TableNotFound(_))
    ));
    assert!(matches!(
        store.update("people", "height", "1"),
        Err(Error::ColumnNotFound(_, _))
    ));
    assert!(matches!(
        store.remove("ghosts", "age", "1"),
        Err(Error::TableNotFound(_))
    ));
    assert!(matches!(
        store.remove("people", "height", "1"),
        Err(Error::ColumnNotFound(_, _))
    ));
    assert_eq!(store.row_count("people"), Ok(5));
}

#[test]
fn test_tables_are_independent() {
    let mut store = people();
    store
        .create_table("pets", [("name", ColumnType::Text)])
        .unwrap();
    store.insert("pets", ["Rex"]).unwrap();

    store.remove("people", "name", "Ann").unwrap();
    store.update("pets", "name", "Tom").unwrap();

    assert_eq!(store.select("pets", &NO_COLUMNS), vec![Row::from(vec!["Tom"])]);
    assert_eq!(store.row_count("people"), Ok(4));
    assert_eq!(store.table_names(), vec!["people", "pets"]);
}

#[test]
fn test_duplicate_policy() {
    let mut lenient = TableStore::new();
    lenient.create_table("t", [("a", ColumnType::Text)]).unwrap();
    lenient
        .create_table("t", [("a", ColumnType::Integer), ("b", ColumnType::Text)])
        .unwrap();
    // First table wins lookups.
    assert!(lenient.insert("t", ["x"]).is_ok());
    assert_eq!(lenient.table_names().len(), 2);

    let mut strict =
        TableStore::with_config(StoreConfig::new().duplicate_tables(DuplicateTablePolicy::Reject));
    strict.create_table("t", [("a", ColumnType::Text)]).unwrap();
    assert_eq!(
        strict.create_table("t", [("a", ColumnType::Text)]),
        Err(Error::TableAlreadyExists("t".to_string()))
    );
}
