//! End-to-end workflows: edit, persist, reload, plot.

use gridstore::persist::{load_dataset, load_delimited, save_dataset, save_delimited};
use gridstore::{plot, Column, PersistError, TableStore};

#[test]
fn edit_then_text_roundtrip_keeps_two_decimal_precision() {
    let mut store = TableStore::with_seed(5, 31);
    store.fill_random();
    assert!(store.set_cell(0, 0, "4"));
    assert!(store.set_cell(1, 1, "-12.345"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    save_delimited(&store, &path).unwrap();
    let loaded = load_delimited(&path).unwrap();

    assert_eq!(loaded.row_count(), store.row_count());
    for row in 0..store.row_count() {
        for col in 0..store.column_count() {
            let a = store.cell(row, col).unwrap();
            let b = loaded.cell(row, col).unwrap();
            assert!((a - b).abs() < 0.005, "({row},{col}): {a} vs {b}");
        }
    }
}

#[test]
fn edit_then_binary_roundtrip_is_bit_identical() {
    let mut store = TableStore::with_seed(8, 31);
    store.fill_random();
    assert!(store.set_cell(2, 1, "0.07"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.gsds");
    save_dataset(&store, &path).unwrap();
    let loaded = load_dataset(&path).unwrap();

    assert_eq!(loaded.matrix().len(), store.matrix().len());
    for (a, b) in loaded.matrix().iter().zip(store.matrix()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn failed_load_leaves_previous_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbled.txt");
    std::fs::write(&path, "1.00 2.00 zzz 4.00\n").unwrap();

    // Replacement-on-success: the old store stays current when the load
    // errors out
    let mut current = TableStore::with_seed(5, 1);
    current.set_cell(0, 1, "55.5");
    let before = current.matrix().to_vec();

    match load_delimited(&path) {
        Ok(replacement) => current = replacement,
        Err(PersistError::Parse { .. }) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(current.matrix(), &before[..]);
}

#[test]
fn loaded_table_feeds_plot_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    std::fs::write(&path, "1.00 10.00 0.00 0.00\n5.00 -10.00 0.00 0.00\n").unwrap();

    let store = load_delimited(&path).unwrap();
    let series = plot::series(&store, Column::Category, Column::Cumulative);

    // Cumulative was recomputed on load: 1+10+20=31, 5-10-20=-25
    assert_eq!(series.points, vec![(1.0, 31.0), (5.0, -25.0)]);
    assert_eq!(series.x_range, (1.0, 5.0));
    assert_eq!(series.y_range, (-25.0, 31.0));
    assert_eq!(series.y_label, "Cumulative");
}

#[test]
fn resize_matches_truncate_and_append_contract() {
    let mut store = TableStore::with_seed(5, 17);
    store.fill_random();
    let original = store.matrix().to_vec();

    store.resize(3);
    assert_eq!(store.row_count(), 3);
    assert_eq!(store.matrix(), &original[..3 * 4]);

    store.resize(7);
    assert_eq!(store.row_count(), 7);
    assert_eq!(&store.matrix()[..3 * 4], &original[..3 * 4]);
    for row in 3..7 {
        let cat = store.cell(row, 0).unwrap();
        assert!((1.0..=5.0).contains(&cat));
        assert_eq!(store.cell(row, 1), Some(0.0));
    }
}

#[test]
fn binary_container_refuses_foreign_files() {
    let dir = tempfile::tempdir().unwrap();

    // A delimited-text file is not a container
    let text_path = dir.path().join("table.txt");
    let store = TableStore::with_seed(3, 5);
    save_delimited(&store, &text_path).unwrap();
    assert!(matches!(
        load_dataset(&text_path),
        Err(PersistError::BadMagic)
    ));

    // And a container is not delimited text
    let bin_path = dir.path().join("table.gsds");
    save_dataset(&store, &bin_path).unwrap();
    assert!(load_delimited(&bin_path).is_err());
}
