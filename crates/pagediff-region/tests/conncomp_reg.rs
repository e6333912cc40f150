//! Connected component and merge regression test
//!
//! Run with:
//! ```
//! cargo test -p pagediff-region --test conncomp_reg
//! ```

use pagediff_core::{DifferenceMask, MASK_ON, Region};
use pagediff_region::{ConnectivityType, extract_regions, find_connected_components, merge_regions};
use pagediff_test::RegParams;

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // -----------------------------------------------------------
    // Two isolated pixels are two components
    // -----------------------------------------------------------
    let mut mask = DifferenceMask::new(10, 10);
    mask.set(0, 0, MASK_ON).expect("set");
    mask.set(5, 5, MASK_ON).expect("set");
    let comps = find_connected_components(&mask, ConnectivityType::EightWay);
    eprintln!("Number of 8 c.c.: {}", comps.len());
    rp.compare_values(2.0, comps.len() as f64, 0.0);

    // Neither survives the size filter
    rp.compare_values(0.0, extract_regions(&mask, 10).len() as f64, 0.0);

    // -----------------------------------------------------------
    // Ring shapes: one component, box covers the outline
    // -----------------------------------------------------------
    let mut ring = DifferenceMask::new(80, 80);
    ring.fill_region(&Region::new_unchecked(10, 10, 49, 49), MASK_ON);
    ring.fill_region(&Region::new_unchecked(12, 12, 47, 47), 0);
    let regions = extract_regions(&ring, 10);
    rp.compare_regions(&[Region::new_unchecked(10, 10, 49, 49)], &regions);

    // -----------------------------------------------------------
    // Merge once, then again: fixed point
    // -----------------------------------------------------------
    let input = [
        Region::new_unchecked(0, 0, 10, 10),
        Region::new_unchecked(12, 0, 20, 10),
    ];
    let once = merge_regions(&input, 5);
    rp.compare_regions(&[Region::new_unchecked(0, 0, 20, 10)], &once);
    let twice = merge_regions(&once, 5);
    rp.compare_regions(&once, &twice);

    // Scattered blocks: merging is idempotent for the default margin
    let mut scattered = DifferenceMask::new(400, 300);
    for (i, &(x, y)) in [(10, 10), (40, 15), (200, 20), (215, 60), (330, 250), (20, 200)]
        .iter()
        .enumerate()
    {
        let size = 10 + i as u32 * 3;
        scattered.fill_region(&Region::new_unchecked(x, y, x + size, y + size), MASK_ON);
    }
    let regions = extract_regions(&scattered, 10);
    rp.compare_values(6.0, regions.len() as f64, 0.0);
    let merged = merge_regions(&regions, 20);
    eprintln!("merged: {:?}", merged);
    rp.compare_regions(&merged, &merge_regions(&merged, 20));
    for r in &merged {
        rp.compare_values(1.0, if r.fits_in(400, 300) { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup());
}
