//! Greedy region merging
//!
//! Regions are sorted by `(y0, x0)` and swept once, growing an accumulator
//! while the next region overlaps it or lies within `margin` pixels of it.
//! The sweep is order-dependent and not an optimal clustering.
//!
//! A single sweep can leave two outputs near each other (an accumulator
//! may grow toward one that was already flushed), so the sweep is repeated
//! until it merges nothing. The result is then a fixed point: merging it
//! again with the same margin returns it unchanged.

use pagediff_core::Region;

/// Merge regions that overlap or lie within `margin` pixels of each other
///
/// The output is sorted by `(y0, x0)`.
pub fn merge_regions(regions: &[Region], margin: u32) -> Vec<Region> {
    let mut merged = sweep(regions.to_vec(), margin);
    loop {
        let before = merged.len();
        merged = sweep(merged, margin);
        if merged.len() == before {
            return merged;
        }
    }
}

/// One sort-then-sweep pass
fn sweep(mut regions: Vec<Region>, margin: u32) -> Vec<Region> {
    regions.sort_by_key(|r| (r.y0, r.x0, r.y1, r.x1));

    let mut iter = regions.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for region in iter {
        if current.is_near(&region, margin) {
            current = current.union(&region);
        } else {
            out.push(current);
            current = region;
        }
    }
    out.push(current);
    out
}
