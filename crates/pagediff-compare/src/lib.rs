//! pagediff-compare - Per-page comparison pipeline
//!
//! Given two rendered pages, this crate:
//!
//! 1. reconciles them onto canvases of a common size ([`reconcile_canvases`])
//! 2. flags pixels whose channel-sum difference exceeds a threshold ([`build_diff_mask`])
//! 3. dilates and blurs that mask ([`smooth_mask`])
//! 4. extracts and merges change regions from the smoothed mask
//! 5. scores similarity on the raw mask ([`similarity_percent`])
//! 6. highlights the regions on a copy of the second page ([`render_overlay`])
//!
//! [`compare_canvases`] runs all of it.
//!
//! # Examples
//!
//! ```
//! use pagediff_compare::{CompareOptions, compare_canvases};
//! use pagediff_core::{Color, PixelBuffer};
//!
//! let a = PixelBuffer::new_filled(64, 64, Color::WHITE).unwrap();
//! let cmp = compare_canvases(&a, &a, &CompareOptions::default()).unwrap();
//! assert_eq!(cmp.similarity_percent, 100.0);
//! ```

mod error;
pub mod mask;
pub mod options;
pub mod overlay;
pub mod pipeline;
pub mod reconcile;
pub mod score;

pub use error::{CompareError, CompareResult};
pub use mask::{build_diff_mask, smooth_mask};
pub use options::{CompareOptions, DEFAULT_THRESHOLD, OverlayStyle, SmoothOptions};
pub use overlay::render_overlay;
pub use pipeline::{PageComparison, compare_canvases};
pub use reconcile::{BACKGROUND, reconcile_canvases};
pub use score::{similarity_from_counts, similarity_percent};
