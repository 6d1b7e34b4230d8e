//! gridstore: the data core of a small numeric-table application.
//!
//! A [`store::TableStore`] owns a row-major `f64` matrix with a fixed
//! 4-column layout (two user-editable columns, two derived ones),
//! validates edits, recomputes the derived columns after every mutation,
//! and notifies registered subscribers synchronously. The
//! [`persist`] module round-trips the matrix through delimited text and
//! a binary dataset container, and [`plot`] extracts chart-ready series
//! for any two columns.
//!
//! The crate is toolkit-free by design: a GUI shell binds a table widget
//! and a plot widget to the store through the cell/header/event surface
//! and implements its own model-adapter on top.

pub mod constants;
pub mod persist;
pub mod plot;
pub mod store;
pub mod types;

pub use persist::{PersistError, PersistResult};
pub use plot::PlotSeries;
pub use store::{SubscriberId, TableStore};
pub use types::{Column, TableEvent, ValueSign};
