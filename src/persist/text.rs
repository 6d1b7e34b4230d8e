//! Whitespace-delimited text format.
//!
//! One row per line, four space-separated numbers, every value formatted
//! with 2 decimal digits (integers included), no header line. Loading is
//! tolerant of shape: values are tokenized across the whole file and
//! reshaped to the fixed column width, so a flat one-line dump loads the
//! same as a properly line-broken one.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::constants::COLUMN_COUNT;
use crate::persist::error::{PersistError, PersistResult};
use crate::store::TableStore;

/// Write the matrix as delimited text, 2 decimal places per value.
///
/// Deterministic and round-trippable for the rounded representation.
pub fn save_delimited<P: AsRef<Path>>(store: &TableStore, path: P) -> PersistResult<()> {
    let mut out = String::new();
    for row in store.matrix().chunks_exact(COLUMN_COUNT) {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // infallible for String
            let _ = write!(out, "{value:.2}");
        }
        out.push('\n');
    }
    fs::write(path.as_ref(), out)?;
    tracing::debug!(
        "saved {} rows as delimited text to {}",
        store.row_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Parse delimited text back into a fresh table.
///
/// Any non-numeric token fails the load; a total value count that is not
/// a multiple of the column width fails with
/// [`PersistError::ShapeMismatch`]; an empty file fails with
/// [`PersistError::EmptyFile`].
pub fn load_delimited<P: AsRef<Path>>(path: P) -> PersistResult<TableStore> {
    let content = fs::read_to_string(path.as_ref())?;

    let mut values = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| PersistError::Parse {
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(PersistError::EmptyFile);
    }

    let store = TableStore::from_matrix(values)?;
    tracing::debug!(
        "loaded {} rows of delimited text from {}",
        store.row_count(),
        path.as_ref().display()
    );
    Ok(store)
}
