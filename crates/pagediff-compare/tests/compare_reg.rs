//! Page comparison regression test
//!
//! End-to-end runs of the comparison pipeline on synthetic pages.
//!
//! Run with:
//! ```
//! cargo test -p pagediff-compare --test compare_reg
//! ```

use pagediff_compare::{
    CompareOptions, build_diff_mask, compare_canvases, reconcile_canvases, similarity_percent,
};
use pagediff_core::{Color, PixelBuffer, Region};
use pagediff_io::{ImageFormat, PngEncoder, RasterEncoder, read_image_mem};
use pagediff_test::{RegParams, page_with_block, solid_page};

#[test]
fn compare_reg() {
    let mut rp = RegParams::new("compare");

    // -----------------------------------------------------------
    // Red 30x30 block on a white 200x200 page
    // -----------------------------------------------------------
    let page_a = solid_page(200, 200, Color::WHITE).expect("page a");
    let block = Region::new_unchecked(50, 50, 79, 79);
    let page_b = page_with_block(200, 200, Color::WHITE, block, Color::RED).expect("page b");

    let opts = CompareOptions::default().with_threshold(30);
    let cmp = compare_canvases(&page_a, &page_b, &opts).expect("compare");
    eprintln!(
        "  differing = {}, similarity = {:.2}, regions = {:?}",
        cmp.differing_pixels, cmp.similarity_percent, cmp.regions
    );

    rp.compare_values(900.0, cmp.differing_pixels as f64, 0.0);
    rp.compare_values(97.75, cmp.similarity_percent, 1e-9);
    rp.compare_values(1.0, if cmp.has_differences() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, cmp.regions.len() as f64, 0.0);
    let covers = cmp.regions.first().is_some_and(|r| r.contains(&block));
    rp.compare_values(1.0, if covers { 1.0 } else { 0.0 }, 0.0);
    // Smoothing widens the box by two pixels on each side
    rp.compare_regions(&[Region::new_unchecked(48, 48, 81, 81)], &cmp.regions);

    // The overlay keeps the page size and survives PNG encoding
    let png = PngEncoder.encode(&cmp.overlay).expect("encode overlay");
    let decoded = read_image_mem(&png).expect("decode overlay");
    rp.compare_pix(&cmp.overlay, &decoded);
    rp.write_pix_and_check(&cmp.overlay, ImageFormat::Png)
        .expect("write overlay");

    // -----------------------------------------------------------
    // Threshold extremes and monotonicity
    // -----------------------------------------------------------
    let max = compare_canvases(&page_a, &page_b, &opts.with_threshold(765)).expect("compare 765");
    rp.compare_values(100.0, max.similarity_percent, 0.0);
    rp.compare_values(0.0, max.regions.len() as f64, 0.0);

    // A horizontal gray ramp against white: each column has its own dissimilarity
    let ramp = {
        let mut buf = PixelBuffer::new_filled(256, 16, Color::WHITE)
            .expect("ramp")
            .to_mut();
        for y in 0..16 {
            for x in 0..256u32 {
                let v = 255 - x as u8;
                buf.set_rgb_unchecked(x, y, Color::new(v, v, v));
            }
        }
        PixelBuffer::from(buf)
    };
    let white = solid_page(256, 16, Color::WHITE).expect("white");
    let mut last = -1.0;
    let mut monotonic = true;
    for threshold in (0..=765).step_by(15) {
        let mask = build_diff_mask(&white, &ramp, threshold).expect("mask");
        let s = similarity_percent(&mask);
        monotonic &= s >= last;
        last = s;
    }
    rp.compare_values(1.0, if monotonic { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(100.0, last, 0.0);

    // -----------------------------------------------------------
    // Canvas reconciliation of unequal pages
    // -----------------------------------------------------------
    let small = solid_page(100, 100, Color::WHITE).expect("small");
    let wide = solid_page(120, 80, Color::WHITE).expect("wide");
    let (ca, cb) = reconcile_canvases(&small, &wide).expect("reconcile");
    rp.compare_values(120.0, ca.width() as f64, 0.0);
    rp.compare_values(100.0, cb.height() as f64, 0.0);

    assert!(rp.cleanup());
}
