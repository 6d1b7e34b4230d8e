//! Shared vocabulary types: column identities, change events, and the
//! sign-based styling hint exposed to presentation adapters.

use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_MAX, CATEGORY_MIN, COLUMN_COUNT};

/// Logical columns of the table, in matrix order.
///
/// The first two columns are user-editable; the last two are always
/// recomputed from them and can never be written directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    /// User-set classification, integer in [`CATEGORY_MIN`]..=[`CATEGORY_MAX`]
    Category,
    /// User-set signed magnitude, rounded to 2 decimals
    Value,
    /// Derived: `Value * 2`
    Recalculated,
    /// Derived: `Category + Value + Recalculated`
    Cumulative,
}

impl Column {
    /// All columns in matrix order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Category,
        Column::Value,
        Column::Recalculated,
        Column::Cumulative,
    ];

    /// Matrix index of this column
    pub fn index(self) -> usize {
        match self {
            Column::Category => 0,
            Column::Value => 1,
            Column::Recalculated => 2,
            Column::Cumulative => 3,
        }
    }

    /// Column for a matrix index, if in range
    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    /// Header label shown by presentation adapters
    pub fn label(self) -> &'static str {
        match self {
            Column::Category => "Category",
            Column::Value => "Value",
            Column::Recalculated => "Recalculated",
            Column::Cumulative => "Cumulative",
        }
    }

    /// Whether user edits are accepted for this column
    pub fn is_editable(self) -> bool {
        matches!(self, Column::Category | Column::Value)
    }
}

/// Styling hint derived from the sign of the Value column.
///
/// This is a read-only property of the data, not stored state; a
/// presentation adapter may map it to cell highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSign {
    Positive,
    Negative,
    Zero,
}

impl ValueSign {
    /// Classify a value by its sign
    pub fn of(value: f64) -> ValueSign {
        if value > 0.0 {
            ValueSign::Positive
        } else if value < 0.0 {
            ValueSign::Negative
        } else {
            ValueSign::Zero
        }
    }
}

/// Change notification delivered to subscribers after a mutation.
///
/// Delivery is synchronous: every event for a mutating call is fully
/// delivered before that call returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    /// A rectangular cell region changed in place; redraw that region.
    /// Bounds are inclusive.
    CellsChanged {
        first_row: usize,
        last_row: usize,
        first_col: usize,
        last_col: usize,
    },
    /// Row identities or count changed (resize, random fill, replacement);
    /// the whole view must be rebuilt.
    StructureChanged,
}

/// Check a parsed category value against the accepted range
pub(crate) fn category_in_range(value: i64) -> bool {
    (CATEGORY_MIN..=CATEGORY_MAX).contains(&value)
}
