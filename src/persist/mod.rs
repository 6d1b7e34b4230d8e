//! Persistence adapters for the table matrix.
//!
//! Two on-disk representations are supported:
//! - whitespace-delimited text, 2-decimal formatting, round-trippable at
//!   that precision ([`text`])
//! - a binary dataset container holding the full-precision matrix under a
//!   single named dataset ([`dataset`])
//!
//! Both load functions build a brand-new [`crate::store::TableStore`];
//! callers replace their previous instance only on success, so a failed
//! load never disturbs existing state.
//!
//! ## Error Handling
//!
//! All operations return `PersistResult<T>` with the [`PersistError`]
//! type. Nothing here is retried; every failure is fatal to the single
//! triggering operation.

mod dataset;
mod error;
mod text;

pub use dataset::*;
pub use error::*;
pub use text::*;
