//! Errors
//!
//! Custom error types used throughout the `infotree` crate.
use thiserror::Error;

/// Errors that can occur while loading tables or inducing a tree.
#[derive(Debug, Error)]
pub enum InfoTreeError {
    /// Entropy was requested for a table without rows.
    #[error("Degenerate dataset: entropy is undefined for a table with no rows.")]
    DegenerateDataset,
    /// Binary entropy was requested for a table with more than two class values.
    #[error("Unsupported class cardinality: binary entropy expects at most 2 class values, {0} found.")]
    UnsupportedClassCardinality(usize),
    /// A row does not have one value per header.
    #[error("Malformed table: row {row} has {found} values, expected {expected}.")]
    MalformedTable { row: usize, expected: usize, found: usize },
    /// A table needs at least the class column.
    #[error("Malformed table: no columns, at least the class column is required.")]
    NoColumns,
    /// Column index outside of the table.
    #[error("Column index {0} is out of range for a table of width {1}.")]
    ColumnOutOfRange(usize, usize),
    /// Unable to read a table or configuration.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to write a configuration.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The worker pool for parallel attribute evaluation could not be created.
    #[error("Unable to build thread pool: {0}")]
    ThreadPool(String),
}
