//! Error types for training, applying and persisting merge models.

use crate::symbol::Symbol;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum BpeError {
    /// No symbols could be read from the input.
    #[error("input contains no symbols")]
    EmptyInput,

    /// A negative merge count was requested.
    #[error("invalid merge count: {0} (must be non-negative)")]
    InvalidMergeCount(i64),

    /// A persisted model could not be turned back into rules.
    #[error("malformed model: {0}")]
    MalformedModel(String),

    /// Input symbol overlaps ids the model owns or may allocate.
    #[error(
        "symbol {symbol} collides with composite range {first_composite}..{limit} of the model"
    )]
    SymbolRangeCollision {
        symbol: Symbol,
        first_composite: Symbol,
        limit: Symbol,
    },

    /// No composite ids are left to allocate.
    #[error("composite symbol space exhausted")]
    SymbolSpaceExhausted,

    /// Model could not be encoded.
    #[error("failed to serialize model: {0}")]
    Serialize(#[source] serde_json::Error),

    /// I/O error with file context
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, BpeError>;
