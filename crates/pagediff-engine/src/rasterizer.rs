//! Document rendering capability

use pagediff_core::PixelBuffer;
use std::path::Path;

/// Opens documents and renders their pages to RGB rasters
///
/// Rendering must be deterministic for a given `(document, page, dpi)`.
/// Closing a document is dropping it.
pub trait PageRasterizer {
    /// An open document handle
    type Document;
    /// Failure opening or rendering a document
    type Error: std::error::Error + 'static;

    /// Open the document at `path`.
    fn open(&self, path: &Path) -> Result<Self::Document, Self::Error>;

    /// Number of pages in `document`.
    fn page_count(&self, document: &Self::Document) -> u32;

    /// Render page `page_index` (0-based) at `dpi`.
    fn render(
        &self,
        document: &Self::Document,
        page_index: u32,
        dpi: u32,
    ) -> Result<PixelBuffer, Self::Error>;
}
