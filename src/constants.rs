//! Crate-wide constants.
//!
//! Centralizes the table layout and edit bounds so the store, the
//! persistence adapters, and host applications agree on them.

// ============================================================================
// Table Layout
// ============================================================================

/// Logical column count; the matrix is always this wide
pub const COLUMN_COUNT: usize = 4;

/// Row count of a freshly constructed table
pub const DEFAULT_ROWS: usize = 5;

// ============================================================================
// Edit Bounds
// ============================================================================

/// Smallest accepted category value
pub const CATEGORY_MIN: i64 = 1;

/// Largest accepted category value
pub const CATEGORY_MAX: i64 = 5;

/// Lower bound of the random value fill range
pub const FILL_VALUE_MIN: f64 = -100.0;

/// Upper bound of the random value fill range
pub const FILL_VALUE_MAX: f64 = 100.0;

/// Row-count bounds a host UI should offer in its resize dialog.
/// The store itself accepts any non-negative row count.
pub const UI_MIN_ROWS: usize = 1;
pub const UI_MAX_ROWS: usize = 20;

// ============================================================================
// Persistence
// ============================================================================

/// Name of the single dataset inside the binary container
pub const DATASET_NAME: &str = "table";
