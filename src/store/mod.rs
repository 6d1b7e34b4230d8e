//! The table store: owns the numeric matrix, enforces per-column edit
//! rules, recomputes derived columns, and notifies subscribers.
//!
//! ## Error Handling
//!
//! Rejected cell edits are not errors: `set_cell` reports them as a
//! `false` return and leaves the matrix untouched. Construction from
//! loaded data can fail for real (`from_matrix` rejects data that does
//! not reshape to the fixed column count) and shares the
//! [`crate::persist`] error type; everything else that can fail (file
//! parsing, I/O) lives in that module.

mod subscribers;
mod table_store;

pub use subscribers::*;
pub use table_store::*;
