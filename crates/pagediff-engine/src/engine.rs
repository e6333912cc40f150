//! Document pair comparison engine

use crate::rasterizer::PageRasterizer;
use crate::report::{DiffReport, ReportHeader, format_report};
use crate::session::{DocumentPairSession, LoadedPair};
use crate::{EngineError, EngineResult};
use pagediff_compare::{CompareOptions, compare_canvases};
use pagediff_core::{Color, MAX_DISSIMILARITY};
use pagediff_io::{PngEncoder, RasterEncoder};
use std::path::Path;
use tracing::{debug, info, trace};

/// Rendering resolution used when none is given
pub const DEFAULT_DPI: u32 = 150;

/// Compares the pages of two documents
///
/// The engine owns a [`PageRasterizer`] to open and render documents and a
/// [`RasterEncoder`] to serialize overlays. It is not thread-safe: drive
/// each engine from one caller at a time.
pub struct DiffEngine<R: PageRasterizer, W: RasterEncoder = PngEncoder> {
    rasterizer: R,
    encoder: W,
    session: DocumentPairSession<R::Document>,
    options: CompareOptions,
    dpi: u32,
}

impl<R: PageRasterizer> DiffEngine<R> {
    /// Create an engine that encodes overlays as PNG.
    pub fn new(rasterizer: R) -> Self {
        Self::with_encoder(rasterizer, PngEncoder)
    }
}

impl<R: PageRasterizer, W: RasterEncoder> DiffEngine<R, W> {
    /// Create an engine with a custom overlay encoder.
    pub fn with_encoder(rasterizer: R, encoder: W) -> Self {
        Self {
            rasterizer,
            encoder,
            session: DocumentPairSession::Empty,
            options: CompareOptions::default(),
            dpi: DEFAULT_DPI,
        }
    }

    /// Set the comparison parameters used by [`compare_all_pages`] and
    /// [`generate_diff_report`], and the region and overlay settings of
    /// every comparison.
    ///
    /// [`compare_all_pages`]: Self::compare_all_pages
    /// [`generate_diff_report`]: Self::generate_diff_report
    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the resolution used by [`generate_diff_report`](Self::generate_diff_report)
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Current comparison parameters
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Default rendering resolution
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// The rasterizer in use
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Current session state
    pub fn session(&self) -> &DocumentPairSession<R::Document> {
        &self.session
    }

    /// Open two documents for comparison, closing any loaded pair first
    ///
    /// # Returns
    ///
    /// `(page_count_a, page_count_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Rasterizer`] if either document fails to
    /// open; the engine is then left empty.
    pub fn load_documents(
        &mut self,
        path_a: impl AsRef<Path>,
        path_b: impl AsRef<Path>,
    ) -> EngineResult<(u32, u32), R::Error> {
        self.close();

        let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());
        let doc_a = self.rasterizer.open(path_a).map_err(EngineError::Rasterizer)?;
        let doc_b = self.rasterizer.open(path_b).map_err(EngineError::Rasterizer)?;
        let pages_a = self.rasterizer.page_count(&doc_a);
        let pages_b = self.rasterizer.page_count(&doc_b);

        info!(
            path_a = %path_a.display(),
            path_b = %path_b.display(),
            pages_a,
            pages_b,
            "loaded document pair"
        );

        self.session = DocumentPairSession::Loaded(LoadedPair {
            doc_a,
            doc_b,
            path_a: path_a.to_path_buf(),
            path_b: path_b.to_path_buf(),
            pages_a,
            pages_b,
        });
        Ok((pages_a, pages_b))
    }

    /// Release both documents. Safe to call when nothing is loaded.
    pub fn close(&mut self) {
        if self.session.is_loaded() {
            info!("closed document pair");
        }
        self.session.close();
    }

    /// Whether a document pair is loaded
    pub fn is_loaded(&self) -> bool {
        self.session.is_loaded()
    }

    /// Page count of the first document, 0 when nothing is loaded
    pub fn page_count_a(&self) -> u32 {
        self.session.loaded().map_or(0, LoadedPair::pages_a)
    }

    /// Page count of the second document, 0 when nothing is loaded
    pub fn page_count_b(&self) -> u32 {
        self.session.loaded().map_or(0, LoadedPair::pages_b)
    }

    /// File names of the loaded documents
    pub fn document_names(&self) -> (Option<&str>, Option<&str>) {
        self.session.loaded().map_or((None, None), LoadedPair::names)
    }

    fn loaded(&self) -> EngineResult<&LoadedPair<R::Document>, R::Error> {
        self.session.loaded().ok_or(EngineError::NotLoaded)
    }

    /// Compare page `index` of both documents
    ///
    /// `color` is the highlight color of the overlay. Returns `Ok(None)`
    /// when the page is missing from either document.
    ///
    /// # Errors
    ///
    /// Checked in this order, before the page-presence test:
    ///
    /// - [`EngineError::NotLoaded`] if no documents are loaded
    /// - [`EngineError::InvalidParameter`] for `dpi == 0` or `threshold > 765`,
    ///   even when `index` is past the end of either document
    ///
    /// Once the page is known to exist in both documents:
    ///
    /// - [`EngineError::Rasterizer`] if rendering fails, passed through unchanged
    pub fn compare_page(
        &self,
        index: u32,
        color: Color,
        dpi: u32,
        threshold: u32,
    ) -> EngineResult<Option<DiffReport>, R::Error> {
        let pair = self.loaded()?;
        check_render_params(dpi, threshold)?;
        self.compare_loaded(pair, index, color, dpi, threshold)
    }

    fn compare_loaded(
        &self,
        pair: &LoadedPair<R::Document>,
        index: u32,
        color: Color,
        dpi: u32,
        threshold: u32,
    ) -> EngineResult<Option<DiffReport>, R::Error> {
        if !pair.has_page(index) {
            trace!(
                page = index,
                pages_a = pair.pages_a,
                pages_b = pair.pages_b,
                "page missing from one document, skipped"
            );
            return Ok(None);
        }

        let page_a = self
            .rasterizer
            .render(&pair.doc_a, index, dpi)
            .map_err(EngineError::Rasterizer)?;
        let page_b = self
            .rasterizer
            .render(&pair.doc_b, index, dpi)
            .map_err(EngineError::Rasterizer)?;

        let mut options = self.options.with_threshold(threshold);
        options.overlay.color = color;
        let cmp = compare_canvases(&page_a, &page_b, &options)?;
        let overlay_image = self.encoder.encode(&cmp.overlay)?;

        debug!(
            page = index,
            dpi,
            threshold,
            differing_pixels = cmp.differing_pixels,
            regions = cmp.regions.len(),
            similarity = cmp.similarity_percent,
            "compared page"
        );

        let (width, height) = cmp.dimensions();
        Ok(Some(DiffReport {
            page_index: index,
            has_differences: cmp.has_differences(),
            similarity_percent: cmp.similarity_percent,
            overlay_image,
            regions: cmp.regions,
            differing_pixels: cmp.differing_pixels,
            width,
            height,
        }))
    }

    /// Lazily compare every page present in both documents
    ///
    /// Pages are compared one at a time as the iterator is advanced, in
    /// index order. Calling this again restarts from page 0.
    ///
    /// # Errors
    ///
    /// Fails up front like [`compare_page`](Self::compare_page) when
    /// nothing is loaded or the parameters are invalid.
    pub fn pages(
        &self,
        color: Color,
        dpi: u32,
        threshold: u32,
    ) -> EngineResult<DiffPages<'_, R, W>, R::Error> {
        let pair = self.loaded()?;
        check_render_params(dpi, threshold)?;
        Ok(DiffPages {
            engine: self,
            pair,
            next: 0,
            color,
            dpi,
            threshold,
        })
    }

    /// Compare every page present in both documents
    ///
    /// Uses the engine's threshold. Pages found in only one document
    /// produce no entry.
    pub fn compare_all_pages(
        &self,
        color: Color,
        dpi: u32,
    ) -> EngineResult<Vec<DiffReport>, R::Error> {
        self.pages(color, dpi, self.options.threshold)?.collect()
    }

    /// Compare all pages with the engine defaults and summarize them as text
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotLoaded`] if no documents are loaded.
    pub fn generate_diff_report(&self) -> EngineResult<String, R::Error> {
        let pair = self.loaded()?;
        let reports = self.compare_all_pages(self.options.overlay.color, self.dpi)?;
        let (name_a, name_b) = pair.names();
        let header = ReportHeader {
            name_a,
            name_b,
            pages_a: pair.pages_a,
            pages_b: pair.pages_b,
        };
        Ok(format_report(&header, &reports))
    }
}

fn check_render_params<E>(dpi: u32, threshold: u32) -> EngineResult<(), E> {
    if dpi == 0 {
        return Err(EngineError::InvalidParameter("dpi must be positive".into()));
    }
    if threshold > MAX_DISSIMILARITY {
        return Err(EngineError::InvalidParameter(format!(
            "threshold must be in 0..={MAX_DISSIMILARITY}, got {threshold}"
        )));
    }
    Ok(())
}

/// Iterator over the page reports of a loaded pair
///
/// Created by [`DiffEngine::pages`].
pub struct DiffPages<'a, R: PageRasterizer, W: RasterEncoder> {
    engine: &'a DiffEngine<R, W>,
    pair: &'a LoadedPair<R::Document>,
    next: u32,
    color: Color,
    dpi: u32,
    threshold: u32,
}

impl<R: PageRasterizer, W: RasterEncoder> Iterator for DiffPages<'_, R, W> {
    type Item = EngineResult<DiffReport, R::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.pair.page_span() {
            let index = self.next;
            self.next += 1;
            match self
                .engine
                .compare_loaded(self.pair, index, self.color, self.dpi, self.threshold)
            {
                Ok(Some(report)) => return Some(Ok(report)),
                Ok(None) => continue,
                Err(e) => {
                    // Stop after the first failure
                    self.next = self.pair.page_span();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
