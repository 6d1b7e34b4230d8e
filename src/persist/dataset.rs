//! Binary dataset container.
//!
//! A single named dataset (the full-precision matrix) in a small
//! fixed-layout file:
//!
//! ```text
//! magic "GSDS" | version u8 | name_len u16 LE | name bytes (UTF-8)
//! | rows u64 LE | cols u64 LE | rows*cols f64 values
//! ```
//!
//! Values are written as raw `f64` bytes via `bytemuck`, so a
//! save/load round trip on the same machine is bit-identical. No
//! rounding is applied in either direction.

use std::fs;
use std::path::Path;

use crate::constants::{COLUMN_COUNT, DATASET_NAME};
use crate::persist::error::{PersistError, PersistResult};
use crate::store::TableStore;

/// Magic bytes identifying a container file
const MAGIC: [u8; 4] = *b"GSDS";

/// Current container format version
const VERSION: u8 = 1;

/// Write the full-precision matrix into a container file under the
/// [`DATASET_NAME`] dataset.
pub fn save_dataset<P: AsRef<Path>>(store: &TableStore, path: P) -> PersistResult<()> {
    let name = DATASET_NAME.as_bytes();
    let payload: &[u8] = bytemuck::cast_slice(store.matrix());

    let mut buf = Vec::with_capacity(4 + 1 + 2 + name.len() + 16 + payload.len());
    buf.extend_from_slice(&MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
    buf.extend_from_slice(name);
    buf.extend_from_slice(&(store.row_count() as u64).to_le_bytes());
    buf.extend_from_slice(&(COLUMN_COUNT as u64).to_le_bytes());
    buf.extend_from_slice(payload);

    fs::write(path.as_ref(), buf)?;
    tracing::debug!(
        "saved {} rows as binary dataset to {}",
        store.row_count(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read the dataset back as a fresh table.
///
/// The magic, version, dataset name, column count, and payload length
/// are all validated; a dataset that is not exactly
/// [`COLUMN_COUNT`] columns wide is rejected with
/// [`PersistError::WrongColumnCount`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> PersistResult<TableStore> {
    let bytes = fs::read(path.as_ref())?;
    let mut reader = Reader::new(&bytes);

    if reader.take(4)? != MAGIC.as_slice() {
        return Err(PersistError::BadMagic);
    }
    let version = reader.take(1)?[0];
    if version != VERSION {
        return Err(PersistError::UnsupportedVersion(version));
    }

    let name_len = u16::from_le_bytes(reader.take(2)?.try_into().unwrap()) as usize;
    let name = String::from_utf8_lossy(reader.take(name_len)?).into_owned();
    if name != DATASET_NAME {
        return Err(PersistError::UnknownDataset {
            found: name,
            expected: DATASET_NAME,
        });
    }

    let rows = u64::from_le_bytes(reader.take(8)?.try_into().unwrap());
    let cols = u64::from_le_bytes(reader.take(8)?.try_into().unwrap());
    if cols != COLUMN_COUNT as u64 {
        return Err(PersistError::WrongColumnCount(cols));
    }

    let payload_len = rows
        .checked_mul(cols)
        .and_then(|e| e.checked_mul(size_of::<f64>() as u64))
        .ok_or(PersistError::DimensionOverflow { rows, cols })?;
    let payload = reader.take(payload_len as usize)?;
    let values: Vec<f64> = bytemuck::pod_collect_to_vec(payload);

    // The payload must run exactly to the end of the file; leftover
    // bytes mean corruption or a concatenated file
    if reader.pos != bytes.len() {
        return Err(PersistError::TrailingBytes(bytes.len() - reader.pos));
    }

    let store = TableStore::from_matrix(values)?;
    tracing::debug!(
        "loaded {rows} rows of binary dataset from {}",
        path.as_ref().display()
    );
    Ok(store)
}

/// Bounds-checked byte cursor; every short read maps to
/// [`PersistError::Truncated`].
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> PersistResult<&'a [u8]> {
        let end = self.pos.saturating_add(len);
        if end > self.bytes.len() {
            return Err(PersistError::Truncated {
                expected: end,
                found: self.bytes.len(),
            });
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}
