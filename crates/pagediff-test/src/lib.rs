//! pagediff-test - Regression test framework for pagediff
//!
//! Supports three modes, selected by `REGTEST_MODE`:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Besides [`RegParams`], the crate carries the synthetic page fixtures and
//! an in-memory [`PageRasterizer`] used to drive the engine without a real
//! document backend.
//!
//! # Usage
//!
//! ```ignore
//! use pagediff_test::RegParams;
//!
//! let mut rp = RegParams::new("compare");
//! rp.compare_values(900.0, differing as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{MemoryRasterError, TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pagediff_core::{Color, PixelBuffer, Region};
use pagediff_engine::PageRasterizer;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pagediff-test is at crates/pagediff-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A page filled with a single color
pub fn solid_page(width: u32, height: u32, color: Color) -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::new_filled(width, height, color)?)
}

/// A page filled with `background` and a solid `color` rectangle over `block`
///
/// The block is clipped to the page.
pub fn page_with_block(
    width: u32,
    height: u32,
    background: Color,
    block: Region,
    color: Color,
) -> TestResult<PixelBuffer> {
    let mut page = PixelBuffer::new_filled(width, height, background)?.to_mut();
    for y in block.y0..=block.y1.min(height.saturating_sub(1)) {
        for x in block.x0..=block.x1.min(width.saturating_sub(1)) {
            page.set_rgb_unchecked(x, y, color);
        }
    }
    Ok(page.into())
}

/// A document held by [`MemoryRasterizer`]
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    pages: Vec<PixelBuffer>,
    page_count: u32,
}

/// Rasterizer serving pre-rendered pages registered under file paths
///
/// `render` ignores the DPI and records every request it receives.
#[derive(Debug, Default)]
pub struct MemoryRasterizer {
    documents: HashMap<PathBuf, MemoryDocument>,
    renders: RefCell<Vec<(u32, u32)>>,
}

impl MemoryRasterizer {
    /// Create an empty rasterizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pages` under `path`, replacing any earlier registration.
    pub fn with_document(self, path: impl Into<PathBuf>, pages: Vec<PixelBuffer>) -> Self {
        let page_count = pages.len() as u32;
        self.with_truncated_document(path, pages, page_count)
    }

    /// Register a document that reports `page_count` pages but can only
    /// render the first `pages.len()` of them.
    ///
    /// Rendering a page past the stored ones fails with
    /// [`MemoryRasterError::PageOutOfRange`], like a corrupt page would.
    pub fn with_truncated_document(
        mut self,
        path: impl Into<PathBuf>,
        pages: Vec<PixelBuffer>,
        page_count: u32,
    ) -> Self {
        self.documents
            .insert(path.into(), MemoryDocument { pages, page_count });
        self
    }

    /// `(page index, dpi)` of every render request so far
    pub fn render_log(&self) -> Vec<(u32, u32)> {
        self.renders.borrow().clone()
    }
}

impl PageRasterizer for MemoryRasterizer {
    type Document = MemoryDocument;
    type Error = MemoryRasterError;

    fn open(&self, path: &Path) -> Result<MemoryDocument, MemoryRasterError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| MemoryRasterError::UnknownDocument(path.to_path_buf()))
    }

    fn page_count(&self, document: &MemoryDocument) -> u32 {
        document.page_count
    }

    fn render(
        &self,
        document: &MemoryDocument,
        page: u32,
        dpi: u32,
    ) -> Result<PixelBuffer, MemoryRasterError> {
        self.renders.borrow_mut().push((page, dpi));
        document
            .pages
            .get(page as usize)
            .cloned()
            .ok_or(MemoryRasterError::PageOutOfRange {
                page,
                count: document.pages.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_with_block() {
        let page =
            page_with_block(20, 20, Color::WHITE, Region::new_unchecked(5, 5, 9, 9), Color::RED)
                .unwrap();
        assert_eq!(page.get_rgb(5, 5), Some(Color::RED));
        assert_eq!(page.get_rgb(9, 9), Some(Color::RED));
        assert_eq!(page.get_rgb(10, 9), Some(Color::WHITE));
        let white = solid_page(20, 20, Color::WHITE).unwrap();
        assert_eq!(page.count_changed_pixels(&white).unwrap(), 25);
    }

    #[test]
    fn test_memory_rasterizer() {
        let page = solid_page(4, 4, Color::WHITE).unwrap();
        let raster = MemoryRasterizer::new().with_document("a.pdf", vec![page.clone(), page]);

        let doc = raster.open(Path::new("a.pdf")).unwrap();
        assert_eq!(raster.page_count(&doc), 2);
        assert!(raster.render(&doc, 1, 150).is_ok());
        assert!(matches!(
            raster.render(&doc, 2, 150),
            Err(MemoryRasterError::PageOutOfRange { page: 2, count: 2 })
        ));
        assert_eq!(raster.render_log(), vec![(1, 150), (2, 150)]);
        assert!(raster.open(Path::new("missing.pdf")).is_err());
    }

    #[test]
    fn test_truncated_document_claims_more_pages() {
        let page = solid_page(4, 4, Color::WHITE).unwrap();
        let raster = MemoryRasterizer::new().with_truncated_document("t.pdf", vec![page], 3);

        let doc = raster.open(Path::new("t.pdf")).unwrap();
        assert_eq!(raster.page_count(&doc), 3);
        assert!(raster.render(&doc, 0, 72).is_ok());
        assert!(matches!(
            raster.render(&doc, 1, 72),
            Err(MemoryRasterError::PageOutOfRange { page: 1, count: 1 })
        ));
    }
}
