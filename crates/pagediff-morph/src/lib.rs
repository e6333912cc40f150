//! pagediff-morph - Morphological operations on difference masks
//!
//! Dilation grows every flagged area of a mask so that nearby changes
//! (the letters of one reworded line, say) fuse before blurring.

mod error;
pub mod grayscale;

pub use error::{MorphError, MorphResult};
pub use grayscale::{dilate_gray, dilate_square};
