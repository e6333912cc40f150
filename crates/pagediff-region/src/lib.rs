//! pagediff-region - Region extraction for pagediff
//!
//! Turns a (smoothed) difference mask into rectangular regions:
//!
//! - **Connected component analysis** - iterative flood fill labelling,
//!   yielding one bounding box per component
//! - **Region merging** - greedy sweep joining boxes that lie close together
//!
//! # Examples
//!
//! ```
//! use pagediff_core::{DifferenceMask, MASK_ON, Region};
//! use pagediff_region::{extract_regions, merge_regions};
//!
//! let mut mask = DifferenceMask::new(100, 100);
//! mask.fill_region(&Region::new_unchecked(10, 10, 29, 29), MASK_ON);
//! mask.fill_region(&Region::new_unchecked(35, 10, 54, 29), MASK_ON);
//!
//! let regions = extract_regions(&mask, 10);
//! assert_eq!(regions.len(), 2);
//!
//! let merged = merge_regions(&regions, 20);
//! assert_eq!(merged, vec![Region::new_unchecked(10, 10, 54, 29)]);
//! ```

pub mod conncomp;
pub mod merge;

pub use conncomp::{
    ConnectedComponent, ConnectivityType, extract_regions, find_connected_components,
};
pub use merge::merge_regions;
