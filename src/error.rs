//! Error types and result utilities for plot deck operations.

use thiserror::Error;

/// Convenience type alias for results that may contain PlotDeckError
pub type PlotDeckResult<T> = Result<T, PlotDeckError>;

/// Error types that can occur while building traces or managing a plot deck.
#[derive(Error, Debug)]
pub enum PlotDeckError {
    /// Error that occurs when a caller passes an argument outside the accepted set.
    ///
    /// This includes an unknown display-mode selector and styling attributes that
    /// the trace kind does not define.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error that occurs when a submitted trace carries no usable type tag.
    #[error("Invalid trace: {0}")]
    InvalidTrace(String),

    /// Error that occurs when 2-D and 3-D traces are combined on one figure.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error that occurs when a trace's type tag is outside the supported set.
    #[error("Unsupported trace type: {0}")]
    UnsupportedType(String),

    /// Error raised by the add-figure path when the submitted trace set fails
    /// validation. Wraps the validation message.
    #[error("Invalid trace set: {0}")]
    Validation(String),

    /// Error that occurs when a registry document cannot be interpreted.
    ///
    /// This happens when the top-level value is not an object, or when an entry
    /// stored under a figure key does not have the figure-record shape.
    #[error("Malformed registry document: {0}")]
    MalformedDocument(String),

    /// Error that occurs when serializing or parsing JSON fails.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error that occurs when reading or writing a registry file fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
