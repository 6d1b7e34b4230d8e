//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down the externally visible formats: the
//! delimited-text file layout and the header labels a presentation
//! adapter renders. Update with `cargo insta test --accept` after
//! intentional format changes.

use gridstore::persist::save_delimited;
use gridstore::TableStore;

#[test]
fn snapshot_delimited_text_format() {
    // Derived columns recompute on construction: row 0 becomes
    // (1, 2.5, 5, 8.5), row 1 becomes (3, -1, -2, 0)
    let store = TableStore::from_matrix(vec![
        1.0, 2.5, 0.0, 0.0, //
        3.0, -1.0, 0.0, 0.0,
    ])
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    save_delimited(&store, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    insta::assert_snapshot!(content, @r"
    1.00 2.50 5.00 8.50
    3.00 -1.00 -2.00 0.00
    ");
}

#[test]
fn snapshot_header_labels() {
    let store = TableStore::default();
    insta::assert_json_snapshot!(store.headers(), @r#"
    [
      "Category",
      "Value",
      "Recalculated",
      "Cumulative"
    ]
    "#);
}
