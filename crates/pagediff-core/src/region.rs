//! Region - Inclusive rectangular bounding box
//!
//! A region covers the pixels `x0..=x1` by `y0..=y1`. It may describe a
//! single connected component or the union of several merged ones.

use crate::error::{Error, Result};

/// A rectangle of pixels with inclusive corners
///
/// Small and `Copy`, like a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    /// Left column
    pub x0: u32,
    /// Top row
    pub y0: u32,
    /// Right column (inclusive)
    pub x1: u32,
    /// Bottom row (inclusive)
    pub y1: u32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0 > x1` or `y0 > y1`.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self> {
        if x0 > x1 || y0 > y1 {
            return Err(Error::InvalidParameter(format!(
                "region corners out of order: ({x0}, {y0})-({x1}, {y1})"
            )));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Create a region without validation
    pub const fn new_unchecked(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A one-pixel region
    pub const fn from_point(x: u32, y: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    /// Area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Grow the region so it includes `(x, y)`.
    #[inline]
    pub fn include_point(&mut self, x: u32, y: u32) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }

    /// Compute the union (bounding box) of two regions
    pub fn union(&self, other: &Region) -> Region {
        Region {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Check whether `other` overlaps this region or lies within `margin`
    /// pixels of it on every side.
    pub fn is_near(&self, other: &Region, margin: u32) -> bool {
        let m = u64::from(margin);
        u64::from(other.x0) <= u64::from(self.x1) + m
            && u64::from(other.x1) + m >= u64::from(self.x0)
            && u64::from(other.y0) <= u64::from(self.y1) + m
            && u64::from(other.y1) + m >= u64::from(self.y0)
    }

    /// Check if this region contains another region
    pub fn contains(&self, other: &Region) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check whether the region lies inside a `width x height` canvas.
    pub fn fits_in(&self, width: u32, height: u32) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1 && self.x1 < width && self.y1 < height
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_size() {
        let r = Region::new(10, 20, 19, 24).unwrap();
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 5);
        assert_eq!(r.area(), 50);
        assert_eq!(Region::from_point(3, 3).area(), 1);
    }

    #[test]
    fn test_region_rejects_swapped_corners() {
        assert!(Region::new(5, 0, 4, 0).is_err());
        assert!(Region::new(0, 5, 0, 4).is_err());
    }

    #[test]
    fn test_include_point_and_union() {
        let mut r = Region::from_point(5, 5);
        r.include_point(2, 8);
        assert_eq!(r, Region::new_unchecked(2, 5, 5, 8));

        let u = r.union(&Region::new_unchecked(10, 0, 12, 1));
        assert_eq!(u, Region::new_unchecked(2, 0, 12, 8));
        assert!(u.contains(&r));
    }

    #[test]
    fn test_is_near() {
        let a = Region::new_unchecked(0, 0, 10, 10);
        assert!(a.is_near(&Region::new_unchecked(12, 0, 20, 10), 5));
        assert!(a.is_near(&Region::new_unchecked(15, 0, 20, 10), 5));
        assert!(!a.is_near(&Region::new_unchecked(16, 0, 20, 10), 5));
        // Margin never underflows near the origin
        assert!(Region::new_unchecked(30, 30, 40, 40).is_near(&a, 20));
        assert!(!Region::new_unchecked(31, 31, 40, 40).is_near(&a, 20));
    }

    #[test]
    fn test_fits_in() {
        assert!(Region::new_unchecked(0, 0, 9, 9).fits_in(10, 10));
        assert!(!Region::new_unchecked(0, 0, 10, 9).fits_in(10, 10));
    }
}
