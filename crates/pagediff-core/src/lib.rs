//! pagediff-core - Basic data structures for page comparison
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the comparison pipeline:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGB8 raster of one rendered page (immutable / mutable)
//! - [`DifferenceMask`] - One byte per pixel, raw (binary) or smoothed
//! - [`Region`] - Inclusive bounding box of a changed area
//! - [`Color`] - RGB color with the channel-sum dissimilarity metric

pub mod error;
pub mod mask;
pub mod raster;
pub mod region;

pub use error::{Error, Result};
pub use mask::{DifferenceMask, FOREGROUND_LEVEL, MASK_OFF, MASK_ON};
pub use raster::{CHANNELS, Color, PixelBuffer, PixelBufferMut};
pub use region::Region;

/// Largest possible channel-sum difference between two RGB8 pixels (3 x 255).
pub const MAX_DISSIMILARITY: u32 = 765;
