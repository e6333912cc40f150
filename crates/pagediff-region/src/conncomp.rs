//! Connected component analysis
//!
//! Components are labelled with an iterative flood fill over an explicit
//! stack, so very large blobs cannot exhaust the call stack. A mask pixel
//! is foreground when its value reaches [`FOREGROUND_LEVEL`], which lets
//! smoothed masks be passed in directly.
//!
//! [`FOREGROUND_LEVEL`]: pagediff_core::FOREGROUND_LEVEL

use pagediff_core::{DifferenceMask, Region};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        match self {
            Self::FourWay => &FOUR,
            Self::EightWay => &EIGHT,
        }
    }
}

/// A connected component of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label in discovery (raster scan) order, starting at 1
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u64,
    /// Bounding box of this component
    pub bounds: Region,
}

/// Find all connected components of the foreground in a mask
///
/// Components are returned in raster-scan order of their first pixel.
pub fn find_connected_components(
    mask: &DifferenceMask,
    connectivity: ConnectivityType,
) -> Vec<ConnectedComponent> {
    let (w, h) = mask.dimensions();
    let mut visited = vec![false; mask.bits().len()];
    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut components = Vec::new();
    let offsets = connectivity.offsets();

    for sy in 0..h {
        for sx in 0..w {
            let idx = sy as usize * w as usize + sx as usize;
            if visited[idx] || !mask.is_foreground(sx, sy) {
                continue;
            }

            visited[idx] = true;
            stack.push((sx, sy));
            let mut bounds = Region::from_point(sx, sy);
            let mut pixel_count = 0u64;

            while let Some((x, y)) = stack.pop() {
                pixel_count += 1;
                bounds.include_point(x, y);

                for &(dx, dy) in offsets {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;
                    if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    let nidx = ny as usize * w as usize + nx as usize;
                    if !visited[nidx] && mask.is_foreground(nx, ny) {
                        visited[nidx] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            components.push(ConnectedComponent {
                label: components.len() as u32 + 1,
                pixel_count,
                bounds,
            });
        }
    }

    components
}

/// Bounding boxes of the 8-connected components at least `min_size`
/// pixels wide and tall
///
/// Components narrower or shorter than `min_size` are treated as noise and
/// dropped. An all-background mask yields an empty list.
pub fn extract_regions(mask: &DifferenceMask, min_size: u32) -> Vec<Region> {
    find_connected_components(mask, ConnectivityType::EightWay)
        .into_iter()
        .map(|c| c.bounds)
        .filter(|r| r.width() >= min_size && r.height() >= min_size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::MASK_ON;

    #[test]
    fn test_empty_mask() {
        assert!(find_connected_components(&DifferenceMask::new(10, 10), ConnectivityType::EightWay).is_empty());
        assert!(extract_regions(&DifferenceMask::new(0, 0), 0).is_empty());
    }

    #[test]
    fn test_separate_points_are_two_components() {
        let mut mask = DifferenceMask::new(10, 10);
        mask.set(0, 0, MASK_ON).unwrap();
        mask.set(5, 5, MASK_ON).unwrap();

        let comps = find_connected_components(&mask, ConnectivityType::EightWay);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].bounds, Region::from_point(0, 0));
        assert_eq!(comps[1].bounds, Region::from_point(5, 5));
        assert_eq!(comps[1].label, 2);
    }

    #[test]
    fn test_diagonal_connectivity() {
        let mut mask = DifferenceMask::new(4, 4);
        for i in 0..4 {
            mask.set(i, i, MASK_ON).unwrap();
        }
        let eight = find_connected_components(&mask, ConnectivityType::EightWay);
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 4);
        assert_eq!(eight[0].bounds, Region::new_unchecked(0, 0, 3, 3));
        assert_eq!(find_connected_components(&mask, ConnectivityType::FourWay).len(), 4);
    }

    #[test]
    fn test_foreground_level_applies() {
        let mut mask = DifferenceMask::new(3, 1);
        mask.set(0, 0, 127).unwrap();
        mask.set(2, 0, 128).unwrap();
        let comps = find_connected_components(&mask, ConnectivityType::EightWay);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].bounds, Region::from_point(2, 0));
    }

    #[test]
    fn test_min_size_filters_both_dimensions() {
        let mut mask = DifferenceMask::new(60, 60);
        mask.fill_region(&Region::new_unchecked(0, 0, 9, 9), MASK_ON); // 10x10 kept
        mask.fill_region(&Region::new_unchecked(20, 0, 49, 8), MASK_ON); // 30x9 dropped
        mask.fill_region(&Region::new_unchecked(0, 20, 8, 49), MASK_ON); // 9x30 dropped
        mask.set(55, 55, MASK_ON).unwrap(); // speck dropped

        let regions = extract_regions(&mask, 10);
        assert_eq!(regions, vec![Region::new_unchecked(0, 0, 9, 9)]);
    }

    #[test]
    fn test_large_component_does_not_recurse() {
        let mut mask = DifferenceMask::new(1000, 1000);
        mask.fill_region(&Region::new_unchecked(0, 0, 999, 999), MASK_ON);
        let regions = extract_regions(&mask, 10);
        assert_eq!(regions, vec![Region::new_unchecked(0, 0, 999, 999)]);
    }
}
