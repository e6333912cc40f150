//! Error types for pagediff-compare

use thiserror::Error;

/// Errors that can occur while comparing two canvases
#[derive(Debug, Error)]
pub enum CompareError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pagediff_core::Error),

    /// Dilation failed
    #[error("morphology error: {0}")]
    Morph(#[from] pagediff_morph::MorphError),

    /// Blurring failed
    #[error("filter error: {0}")]
    Filter(#[from] pagediff_filter::FilterError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
