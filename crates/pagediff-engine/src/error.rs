//! Error types for pagediff-engine

use pagediff_compare::CompareError;
use pagediff_io::IoError;
use thiserror::Error;

/// Errors raised by a [`DiffEngine`](crate::DiffEngine)
///
/// `E` is the error type of the page rasterizer in use. Its errors are
/// passed through untouched.
#[derive(Debug, Error)]
pub enum EngineError<E> {
    /// A compare or report operation ran with no documents loaded
    #[error("no documents loaded")]
    NotLoaded,

    /// The page rasterizer failed
    #[error(transparent)]
    Rasterizer(E),

    /// The comparison pipeline failed
    #[error("comparison failed: {0}")]
    Compare(#[from] CompareError),

    /// The overlay could not be encoded
    #[error("overlay encoding failed: {0}")]
    Encode(#[from] IoError),

    /// Invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for engine operations
pub type EngineResult<T, E> = Result<T, EngineError<E>>;
