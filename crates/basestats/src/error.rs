//! Error types raised while loading tables and generating source.

use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`StatsError`].
///
/// Every category aborts the run; the classification only exists so callers
/// and tests can tell a bad data file from a bad lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input file missing or unreadable.
    FileAccess,
    /// Malformed delimited content.
    Structure,
    /// A required key, offset or category is absent from a loaded table.
    Lookup,
    /// The generated file could not be written.
    Output,
    /// The generator configuration file is invalid.
    Config,
}

/// Errors surfaced by the loaders, the emitter and the pipeline.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{file}: line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{file}: row '{key}' column {column} is not a number: '{value}'")]
    NotANumber {
        file: String,
        key: String,
        column: usize,
        value: String,
    },

    #[error("{table}: no row keyed '{key}'")]
    MissingKey { table: String, key: String },

    #[error("{table}: row '{key}' has {width} values, no value at offset {offset}")]
    MissingColumn {
        table: String,
        key: String,
        offset: usize,
        width: usize,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid generator config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl StatsError {
    pub fn kind(&self) -> ErrorKind {
        use StatsError::*;
        match self {
            Read { .. } => ErrorKind::FileAccess,
            Csv { .. } | RaggedRow { .. } | NotANumber { .. } => ErrorKind::Structure,
            MissingKey { .. } | MissingColumn { .. } => ErrorKind::Lookup,
            Write { .. } => ErrorKind::Output,
            Config { .. } => ErrorKind::Config,
        }
    }

    pub fn error_code(&self) -> &'static str {
        use StatsError::*;
        match self {
            Read { .. } => "TABLE_READ",
            Csv { .. } => "TABLE_MALFORMED",
            RaggedRow { .. } => "TABLE_RAGGED_ROW",
            NotANumber { .. } => "TABLE_NOT_A_NUMBER",
            MissingKey { .. } => "LOOKUP_MISSING_KEY",
            MissingColumn { .. } => "LOOKUP_MISSING_COLUMN",
            Write { .. } => "OUTPUT_WRITE",
            Config { .. } => "CONFIG_INVALID",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
