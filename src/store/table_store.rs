//! The data-owning table component.
//!
//! `TableStore` holds a row-major `f64` matrix that is always
//! [`COLUMN_COUNT`] wide. The first two columns are user-editable under
//! per-column rules, the last two are derived and recomputed after every
//! mutation, before control returns to the caller. It has no toolkit
//! dependency; a presentation layer adapts it to whatever table-model
//! protocol it needs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::constants::{
    CATEGORY_MAX, CATEGORY_MIN, COLUMN_COUNT, DEFAULT_ROWS, FILL_VALUE_MAX, FILL_VALUE_MIN,
};
use crate::persist::{PersistError, PersistResult};
use crate::store::subscribers::Subscribers;
use crate::store::SubscriberId;
use crate::types::{category_in_range, Column, TableEvent, ValueSign};

/// Round to 2 decimals, half away from zero (`f64::round` semantics)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Numeric table with two editable and two derived columns.
pub struct TableStore {
    /// Row-major matrix, always `rows * COLUMN_COUNT` long
    values: Vec<f64>,
    rows: usize,
    /// Owned random source; injectable via [`TableStore::with_rng`] so
    /// randomized operations are testable
    rng: StdRng,
    subscribers: Subscribers,
}

impl TableStore {
    /// Create a table with random defaults: random category, zero value.
    pub fn new(rows: usize) -> Self {
        Self::with_rng(rows, StdRng::from_entropy())
    }

    /// Create a table with a deterministic random source.
    pub fn with_seed(rows: usize, seed: u64) -> Self {
        Self::with_rng(rows, StdRng::seed_from_u64(seed))
    }

    /// Create a table with the given random source.
    pub fn with_rng(rows: usize, mut rng: StdRng) -> Self {
        let mut values = vec![0.0; rows * COLUMN_COUNT];
        for row in 0..rows {
            values[row * COLUMN_COUNT] = rng.gen_range(CATEGORY_MIN..=CATEGORY_MAX) as f64;
        }
        let mut store = Self {
            values,
            rows,
            rng,
            subscribers: Subscribers::new(),
        };
        store.recompute();
        store
    }

    /// Build a table from a flat row-major matrix, e.g. loaded from a file.
    ///
    /// A length that is not a multiple of [`COLUMN_COUNT`] cannot be
    /// reshaped and fails with [`PersistError::ShapeMismatch`]. Derived
    /// columns are recomputed immediately, so stale values in the source
    /// data are never observable.
    pub fn from_matrix(values: Vec<f64>) -> PersistResult<Self> {
        if values.len() % COLUMN_COUNT != 0 {
            return Err(PersistError::ShapeMismatch {
                elements: values.len(),
                columns: COLUMN_COUNT,
            });
        }
        let rows = values.len() / COLUMN_COUNT;
        let mut store = Self {
            values,
            rows,
            rng: StdRng::from_entropy(),
            subscribers: Subscribers::new(),
        };
        store.recompute();
        Ok(store)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    /// Raw value at (row, col), or `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < COLUMN_COUNT {
            Some(self.values[row * COLUMN_COUNT + col])
        } else {
            None
        }
    }

    /// Display text for a cell: the category column renders as integer
    /// text, every other column with 2 decimals.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        let value = self.cell(row, col)?;
        if col == Column::Category.index() {
            Some(format!("{}", value as i64))
        } else {
            Some(format!("{value:.2}"))
        }
    }

    /// Header labels in column order
    pub fn headers(&self) -> [&'static str; COLUMN_COUNT] {
        [
            Column::Category.label(),
            Column::Value.label(),
            Column::Recalculated.label(),
            Column::Cumulative.label(),
        ]
    }

    /// The whole matrix, row-major
    pub fn matrix(&self) -> &[f64] {
        &self.values
    }

    /// Styling hint for a row, derived from the sign of its Value cell
    pub fn value_sign(&self, row: usize) -> Option<ValueSign> {
        self.cell(row, Column::Value.index()).map(ValueSign::of)
    }

    /// Apply a user edit.
    ///
    /// Only the category and value columns accept edits. The input is
    /// parsed from text the way an edit widget hands it over: the
    /// category column requires an integer in
    /// [`CATEGORY_MIN`]..=[`CATEGORY_MAX`], the value column a finite
    /// real which is stored rounded to 2 decimals. Returns `false` and
    /// leaves the matrix untouched on any rejected input; on success the
    /// derived columns are recomputed and change events are delivered
    /// before returning.
    pub fn set_cell(&mut self, row: usize, col: usize, input: &str) -> bool {
        if row >= self.rows {
            return false;
        }
        let Some(column) = Column::from_index(col) else {
            return false;
        };

        let value = match column {
            Column::Category => match input.trim().parse::<i64>() {
                Ok(v) if category_in_range(v) => v as f64,
                _ => {
                    tracing::trace!("rejected category edit at row {row}: {input:?}");
                    return false;
                }
            },
            Column::Value => match input.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => round2(v),
                _ => {
                    tracing::trace!("rejected value edit at row {row}: {input:?}");
                    return false;
                }
            },
            _ => return false,
        };

        self.values[row * COLUMN_COUNT + col] = value;
        self.recompute();
        self.emit(TableEvent::CellsChanged {
            first_row: row,
            last_row: row,
            first_col: col,
            last_col: col,
        });
        self.notify_derived();
        true
    }

    /// Overwrite every row with random data: category uniform in
    /// [`CATEGORY_MIN`]..=[`CATEGORY_MAX`], value uniform in
    /// [`FILL_VALUE_MIN`]..=[`FILL_VALUE_MAX`] rounded to 2 decimals.
    pub fn fill_random(&mut self) {
        for row in 0..self.rows {
            self.values[row * COLUMN_COUNT] =
                self.rng.gen_range(CATEGORY_MIN..=CATEGORY_MAX) as f64;
            self.values[row * COLUMN_COUNT + 1] =
                round2(self.rng.gen_range(FILL_VALUE_MIN..=FILL_VALUE_MAX));
        }
        self.recompute();
        self.notify_derived();
        self.emit(TableEvent::StructureChanged);
    }

    /// Change the row count.
    ///
    /// Shrinking truncates from the end; growing appends rows with a
    /// random category and zero value. A count of 0 is accepted and
    /// yields an empty table.
    pub fn resize(&mut self, new_rows: usize) {
        let old_rows = self.rows;
        if new_rows <= old_rows {
            self.values.truncate(new_rows * COLUMN_COUNT);
        } else {
            self.values.reserve((new_rows - old_rows) * COLUMN_COUNT);
            for _ in old_rows..new_rows {
                let category = self.rng.gen_range(CATEGORY_MIN..=CATEGORY_MAX) as f64;
                self.values.extend_from_slice(&[category, 0.0, 0.0, 0.0]);
            }
        }
        self.rows = new_rows;
        self.recompute();
        tracing::debug!("resized table from {old_rows} to {new_rows} rows");
        self.notify_derived();
        self.emit(TableEvent::StructureChanged);
    }

    /// Register a change-event callback; delivery is synchronous and in
    /// registration order.
    pub fn on_event(&mut self, callback: impl FnMut(&TableEvent) + 'static) -> SubscriberId {
        self.subscribers.add(Box::new(callback))
    }

    /// Drop a previously registered callback
    pub fn remove_subscriber(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id)
    }

    /// Recompute the derived columns for every row:
    /// `Recalculated = Value * 2`, `Cumulative = Category + Value + Recalculated`.
    fn recompute(&mut self) {
        for row in self.values.chunks_exact_mut(COLUMN_COUNT) {
            row[2] = row[1] * 2.0;
            row[3] = row[0] + row[1] + row[2];
        }
    }

    /// Emit a region event covering the derived columns of every row
    fn notify_derived(&mut self) {
        if self.rows == 0 {
            return;
        }
        self.emit(TableEvent::CellsChanged {
            first_row: 0,
            last_row: self.rows - 1,
            first_col: Column::Recalculated.index(),
            last_col: Column::Cumulative.index(),
        });
    }

    fn emit(&mut self, event: TableEvent) {
        self.subscribers.emit(&event);
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl fmt::Debug for TableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStore")
            .field("rows", &self.rows)
            .field("values", &self.values)
            .finish()
    }
}
