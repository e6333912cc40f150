//! Error types for the test framework

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Fixture construction failed
    #[error("fixture error: {0}")]
    Fixture(#[from] pagediff_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

/// Errors reported by [`MemoryRasterizer`](crate::MemoryRasterizer)
#[derive(Debug, Error)]
pub enum MemoryRasterError {
    /// No document was registered under the path
    #[error("no document registered at '{}'", .0.display())]
    UnknownDocument(PathBuf),

    /// Page index past the end of the document
    #[error("page {page} out of range (document has {count} pages)")]
    PageOutOfRange { page: u32, count: usize },
}
