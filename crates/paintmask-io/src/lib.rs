//! paintmask-io - lossless PNG input/output
//!
//! File-level entry points for the pipeline:
//!
//! - [`read_outline`] - load an outline image as 8-bit grayscale
//! - [`write_mask`] - persist a region mask losslessly
//! - [`write_gray`] - persist a grayscale raster (fixtures, debugging)
//!
//! All fatal input conditions (missing file, decode failure, zero-area
//! image) surface before any output file is created, so a failed run
//! never leaves a partial mask behind. File handles are scoped to each
//! call and released on every path.

mod error;
mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_mask_png, write_png};

use paintmask_core::{GrayImage, RegionMask};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read an outline image from a PNG file.
pub fn read_outline<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a region mask to a PNG file.
pub fn write_mask<P: AsRef<Path>>(mask: &RegionMask, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_mask_png(mask, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a grayscale image to a PNG file.
pub fn write_gray<P: AsRef<Path>>(image: &GrayImage, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}
