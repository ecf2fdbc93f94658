//! Region extraction regression test
//!
//! Exercises the outline-to-mask derivation end to end on synthetic
//! pages: open-background classification, noise filtering, identifier
//! assignment, and the identifier budget.
//!
//! Run with:
//! ```
//! cargo test -p paintmask-region --test extract_reg
//! ```

use paintmask_core::MAX_REGIONS;
use paintmask_morph::binarize;
use paintmask_region::{ExtractOptions, extract};
use paintmask_test::{blank_page, frame_page, lattice_page};

fn options(threshold: u8, dilate_iterations: u32, min_region_size: u32) -> ExtractOptions {
    ExtractOptions {
        threshold,
        dilate_iterations,
        min_region_size,
    }
}

#[test]
fn all_white_page_is_entirely_open() {
    // A single 100-pixel component touching all four edges: open
    // background, never paintable.
    let page = blank_page(10, 10);
    let mask = extract(&page, &options(200, 0, 1));
    assert_eq!(mask.region_count(), 0);
    assert!(mask.data().iter().all(|&id| id == 0));
}

#[test]
fn frame_interior_is_the_only_region() {
    // 1-pixel frame from (2,2) to (7,7): the 4x4 interior is enclosed,
    // the exterior ring touches the border.
    let page = frame_page(10, 10, 2, 2, 7, 7);
    let mask = extract(&page, &options(200, 0, 1));

    assert_eq!(mask.region_count(), 1);
    let region = &mask.regions()[0];
    assert_eq!(region.id, 1);
    assert_eq!(region.pixel_count, 16);
    assert_eq!(region.bounds.x, 3);
    assert_eq!(region.bounds.y, 3);
    assert_eq!(region.bounds.max_x(), 6);
    assert_eq!(region.bounds.max_y(), 6);

    for y in 0..10 {
        for x in 0..10 {
            let expected = if (3..=6).contains(&x) && (3..=6).contains(&y) {
                1
            } else {
                0
            };
            assert_eq!(mask.region_at(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn undersized_interior_is_filtered_out() {
    // Same frame, but the 16-pixel interior no longer meets the minimum.
    let page = frame_page(10, 10, 2, 2, 7, 7);
    let mask = extract(&page, &options(200, 0, 20));
    assert_eq!(mask.region_count(), 0);
    assert!(mask.data().iter().all(|&id| id == 0));
}

#[test]
fn edge_frame_interior_is_paintable() {
    // Outline stroked along the outermost rows and columns: the ink on
    // the border must never become a region, while the area it encloses
    // is genuinely enclosed (the open exterior has been inked away).
    let page = frame_page(10, 10, 0, 0, 9, 9);
    let mask = extract(&page, &options(200, 0, 1));

    assert_eq!(mask.region_count(), 1);
    assert_eq!(mask.regions()[0].pixel_count, 64);
    for i in 0..10 {
        assert_eq!(mask.region_at(i, 0), Some(0));
        assert_eq!(mask.region_at(i, 9), Some(0));
        assert_eq!(mask.region_at(0, i), Some(0));
        assert_eq!(mask.region_at(9, i), Some(0));
    }
    assert_eq!(mask.region_at(5, 5), Some(1));
}

#[test]
fn ink_pixels_stay_zero_after_dilation() {
    let page = frame_page(12, 12, 2, 2, 7, 7);
    let opts = options(200, 1, 1);
    let mask = extract(&page, &opts);

    // Every pre-dilation ink pixel maps to 0 in the output.
    let ink = binarize(&page, opts.threshold);
    for y in 0..12 {
        for x in 0..12 {
            if ink.get(x, y) == Some(true) {
                assert_eq!(mask.region_at(x, y), Some(0), "ink pixel ({x}, {y})");
            }
        }
    }
    // The interior survives, shrunk by the dilated outline.
    assert_eq!(mask.region_count(), 1);
    assert_eq!(mask.regions()[0].pixel_count, 4);
}

#[test]
fn identifiers_are_dense_and_ordered_by_area() {
    // Two enclosed regions of different sizes on one page.
    let mut page = blank_page(22, 13);
    paintmask_test::draw_frame(&mut page, 1, 1, 10, 10); // 8x8 = 64 px interior
    paintmask_test::draw_frame(&mut page, 12, 3, 19, 8); // 6x4 = 24 px interior
    let mask = extract(&page, &options(200, 0, 1));

    assert_eq!(mask.region_count(), 2);
    assert_eq!(mask.regions()[0].id, 1);
    assert_eq!(mask.regions()[0].pixel_count, 64);
    assert_eq!(mask.regions()[1].id, 2);
    assert_eq!(mask.regions()[1].pixel_count, 24);

    // Border invariant: nothing nonzero on the canvas edge.
    let (w, h) = (mask.width(), mask.height());
    for x in 0..w {
        assert_eq!(mask.region_at(x, 0), Some(0));
        assert_eq!(mask.region_at(x, h - 1), Some(0));
    }
    for y in 0..h {
        assert_eq!(mask.region_at(0, y), Some(0));
        assert_eq!(mask.region_at(w - 1, y), Some(0));
    }
}

#[test]
fn extraction_is_deterministic() {
    let page = lattice_page(6, 4, 10);
    let opts = ExtractOptions::default();
    let first = extract(&page, &opts);
    let second = extract(&page, &opts);
    // Default dilation thins each 10x10 cell to 8x8 = 64 pixels, still
    // above the default minimum size.
    assert_eq!(first.region_count(), 24);
    assert_eq!(first.data(), second.data());
    assert_eq!(first.regions(), second.regions());
}

#[test]
fn identifier_budget_caps_at_255() {
    // 18 x 18 = 324 enclosed cells of 81 pixels each, all above the
    // minimum size and none touching the border.
    let page = lattice_page(18, 18, 9);
    let mask = extract(&page, &options(200, 0, 50));

    assert_eq!(mask.region_count(), MAX_REGIONS);
    assert_eq!(mask.dropped_regions(), 324 - MAX_REGIONS as u32);

    // Dense identifiers 1..=255, each covering one full cell.
    let mut per_id = [0u32; MAX_REGIONS + 1];
    for &id in mask.data() {
        per_id[id as usize] += 1;
    }
    for id in 1..=MAX_REGIONS {
        assert_eq!(per_id[id], 81, "identifier {id}");
    }
    // The 69 unlabeled survivors stay at 0 alongside the lattice ink.
    let cells = 324u32;
    let labeled: u32 = (1..=MAX_REGIONS).map(|id| per_id[id]).sum();
    assert_eq!(labeled, (cells - mask.dropped_regions()) * 81);
}

#[test]
fn unsealed_gap_leaks_without_dilation() {
    // A frame with a 1-pixel breach: without gap sealing the interior
    // joins the open exterior; one dilation pass restores enclosure.
    let mut page = frame_page(12, 12, 2, 2, 9, 9);
    page.set_pixel(5, 2, paintmask_test::PAPER).unwrap();

    let leaked = extract(&page, &options(200, 0, 1));
    assert_eq!(leaked.region_count(), 0);

    let sealed = extract(&page, &options(200, 1, 1));
    assert_eq!(sealed.region_count(), 1);
}
