//! Mask dilation regression test
//!
//! Checks how far flagged areas grow and that nearby marks fuse.
//!
//! Run with:
//! ```
//! cargo test -p pagediff-morph --test dilate_reg
//! ```

use pagediff_core::{DifferenceMask, MASK_ON, Region};
use pagediff_morph::{dilate_gray, dilate_square};
use pagediff_test::RegParams;

#[test]
fn dilate_reg() {
    let mut rp = RegParams::new("dilate");

    // A 30x30 block grows by two pixels on each side
    eprintln!("=== Block growth ===");
    let mut mask = DifferenceMask::new(200, 200);
    mask.fill_region(&Region::new_unchecked(50, 50, 79, 79), MASK_ON);
    let dilated = dilate_square(&mask, 5).expect("dilate");
    rp.compare_values(34.0 * 34.0, dilated.count_set() as f64, 0.0);
    rp.compare_values(255.0, dilated.get(48, 48).unwrap_or(0) as f64, 0.0);
    rp.compare_values(0.0, dilated.get(47, 48).unwrap_or(0) as f64, 0.0);

    // Two marks four pixels apart fuse into one run
    eprintln!("=== Fusion of neighbours ===");
    let mut mask = DifferenceMask::new(40, 5);
    mask.set(10, 2, MASK_ON).expect("set");
    mask.set(14, 2, MASK_ON).expect("set");
    let dilated = dilate_gray(&mask, 5, 1).expect("dilate");
    let run: Vec<u8> = (8..=16).map(|x| dilated.get_unchecked(x, 2)).collect();
    rp.compare_values(
        9.0,
        run.iter().filter(|&&v| v == MASK_ON).count() as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
