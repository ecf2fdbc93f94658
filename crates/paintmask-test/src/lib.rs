//! paintmask-test - synthetic page fixtures
//!
//! Builders for the outline rasters the integration suites exercise:
//! blank pages, single-pixel rectangle frames, and cell lattices with
//! hundreds of enclosed regions. Pages are pure black ink on pure white
//! paper, matching what the upstream drawing pipeline guarantees after
//! thresholding.

use paintmask_core::GrayImage;

/// Sample value for drawn outline ink.
pub const INK: u8 = 0;
/// Sample value for undrawn paper.
pub const PAPER: u8 = 255;

/// An all-paper page.
pub fn blank_page(width: u32, height: u32) -> GrayImage {
    GrayImage::new(width, height, PAPER).expect("fixture dimensions are non-zero")
}

/// Draw a 1-pixel rectangle outline in ink, corners inclusive.
///
/// # Panics
///
/// Panics if the corners fall outside the canvas; fixtures are expected
/// to be constructed in bounds.
pub fn draw_frame(image: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for x in x0..=x1 {
        image.set_pixel(x, y0, INK).expect("frame inside canvas");
        image.set_pixel(x, y1, INK).expect("frame inside canvas");
    }
    for y in y0..=y1 {
        image.set_pixel(x0, y, INK).expect("frame inside canvas");
        image.set_pixel(x1, y, INK).expect("frame inside canvas");
    }
}

/// A page with a single 1-pixel rectangle frame.
pub fn frame_page(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> GrayImage {
    let mut page = blank_page(width, height);
    draw_frame(&mut page, x0, y0, x1, y1);
    page
}

/// A lattice page: `cells_x` x `cells_y` enclosed square cells of
/// `cell` x `cell` paper pixels each, separated (and surrounded) by
/// 1-pixel ink lines.
///
/// The outermost lines lie on the canvas edge, so every cell interior is
/// fully enclosed and none touches the border.
pub fn lattice_page(cells_x: u32, cells_y: u32, cell: u32) -> GrayImage {
    let pitch = cell + 1;
    let width = cells_x * pitch + 1;
    let height = cells_y * pitch + 1;
    let mut page = blank_page(width, height);
    for y in 0..height {
        for x in 0..width {
            if x % pitch == 0 || y % pitch == 0 {
                page.set_pixel(x, y, INK).expect("lattice inside canvas");
            }
        }
    }
    page
}
