//! Error types for persistence operations
//!
//! Provides unified error handling for saving and loading the table
//! matrix in both on-disk formats.

use thiserror::Error;

/// Errors that can occur while saving or loading a table
#[derive(Error, Debug)]
pub enum PersistError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A token in a delimited-text file is not a number
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    /// File contains no values at all
    #[error("empty file")]
    EmptyFile,

    /// Element count cannot be reshaped to the fixed column count
    #[error("{elements} values cannot be reshaped to {columns} columns")]
    ShapeMismatch { elements: usize, columns: usize },

    /// File does not start with the container magic bytes
    #[error("not a dataset container (bad magic)")]
    BadMagic,

    /// Container version is newer than this build understands
    #[error("unsupported container version {0}")]
    UnsupportedVersion(u8),

    /// Container holds a dataset under an unexpected name
    #[error("container holds dataset {found:?}, expected {expected:?}")]
    UnknownDataset {
        found: String,
        expected: &'static str,
    },

    /// File is shorter than its header claims
    #[error("truncated file: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// File is longer than its header claims
    #[error("{0} trailing bytes after dataset payload")]
    TrailingBytes(usize),

    /// Declared dimensions do not fit in memory at all
    #[error("dataset dimensions overflow: {rows} rows x {cols} columns")]
    DimensionOverflow { rows: u64, cols: u64 },

    /// Stored dataset is not 4 columns wide
    #[error("dataset has {0} columns, expected 4")]
    WrongColumnCount(u64),
}

/// Result type alias for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;
