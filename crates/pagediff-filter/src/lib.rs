//! pagediff-filter - Filtering operations on difference masks
//!
//! Provides convolution kernels and the separable Gaussian blur used to
//! soften a dilated mask into smooth blobs before re-thresholding.

mod error;
pub mod convolve;
pub mod kernel;

pub use convolve::{convolve_sep, gaussian_blur};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
