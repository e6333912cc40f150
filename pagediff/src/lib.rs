//! pagediff - Visual comparison of document pages
//!
//! Renders the pages of two documents, finds where they differ and
//! produces a highlighted overlay plus a similarity score for every page.
//!
//! # Overview
//!
//! - Canvas reconciliation, difference masks and region extraction
//! - Mask smoothing (grayscale dilation, Gaussian blur)
//! - Overlay encoding (PNG, PNM)
//! - A session-based engine driving any [`PageRasterizer`] backend
//!
//! # Example
//!
//! ```
//! use pagediff::{Color, PixelBuffer, compare::{CompareOptions, compare_canvases}};
//!
//! let a = PixelBuffer::new_filled(64, 64, Color::WHITE).unwrap();
//! let b = PixelBuffer::new_filled(64, 64, Color::WHITE).unwrap();
//! let cmp = compare_canvases(&a, &b, &CompareOptions::default()).unwrap();
//! assert_eq!(cmp.similarity_percent, 100.0);
//! assert!(cmp.regions.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pagediff_core::*;

// Re-export the engine surface at the top level
pub use pagediff_engine::{
    DEFAULT_DPI, DiffEngine, DiffReport, EngineError, EngineResult, PageRasterizer,
};

// Re-export stage crates as modules to avoid name conflicts
pub use pagediff_compare as compare;
pub use pagediff_engine as engine;
pub use pagediff_filter as filter;
pub use pagediff_io as io;
pub use pagediff_morph as morph;
pub use pagediff_region as region;
