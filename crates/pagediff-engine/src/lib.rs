//! pagediff-engine - Document pair comparison sessions
//!
//! A [`DiffEngine`] loads two documents through a [`PageRasterizer`],
//! compares them page by page with the pipeline from `pagediff-compare`
//! and hands back one [`DiffReport`] per page present in both documents.
//!
//! # Examples
//!
//! ```ignore
//! use pagediff_core::Color;
//! use pagediff_engine::{DEFAULT_DPI, DiffEngine};
//!
//! let mut engine = DiffEngine::new(my_rasterizer);
//! let (pages_a, pages_b) = engine.load_documents("v1.pdf", "v2.pdf")?;
//! for report in engine.pages(Color::RED, DEFAULT_DPI, 30)? {
//!     let report = report?;
//!     println!("page {}: {:.1}%", report.page_index + 1, report.similarity_percent);
//! }
//! println!("{}", engine.generate_diff_report()?);
//! engine.close();
//! ```

mod engine;
mod error;
pub mod rasterizer;
pub mod report;
pub mod session;

pub use engine::{DEFAULT_DPI, DiffEngine, DiffPages};
pub use error::{EngineError, EngineResult};
pub use rasterizer::PageRasterizer;
pub use report::DiffReport;
pub use session::{DocumentPairSession, LoadedPair};
