//! PNG image format support
//!
//! Outline images come in as PNG in whatever color layout the drawing
//! pipeline exported (grayscale, gray+alpha, RGB, RGBA, or indexed);
//! region masks go out as 8-bit grayscale PNG with no palette and no
//! lossy transform, so the app runtime reads exact identifier values
//! back.

use crate::{IoError, IoResult};
use paintmask_core::{GrayImage, RegionMask};
use ::png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit grayscale.
///
/// Palette and sub-byte layouts are expanded and 16-bit channels reduced
/// before conversion, so any common PNG works as input. Color samples
/// are reduced to luma with the 0.299 / 0.587 / 0.114 weights; alpha is
/// ignored (outline art is exported at full opacity).
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let width = info.width;
    let height = info.height;
    let data = &buf[..info.buffer_size()];
    let bytes_per_row = info.line_size;

    let mut samples = Vec::with_capacity(width as usize * height as usize);
    match info.color_type {
        ColorType::Grayscale => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..];
                samples.extend_from_slice(&row[..width as usize]);
            }
        }
        ColorType::GrayscaleAlpha => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..y * bytes_per_row + 2 * width as usize];
                samples.extend(row.chunks_exact(2).map(|px| px[0]));
            }
        }
        ColorType::Rgb => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..y * bytes_per_row + 3 * width as usize];
                samples.extend(row.chunks_exact(3).map(|px| luma(px[0], px[1], px[2])));
            }
        }
        ColorType::Rgba => {
            for y in 0..height as usize {
                let row = &data[y * bytes_per_row..y * bytes_per_row + 4 * width as usize];
                samples.extend(row.chunks_exact(4).map(|px| luma(px[0], px[1], px[2])));
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG color type after normalization: {other:?}"
            )));
        }
    }

    GrayImage::from_raw(width, height, samples).map_err(IoError::Core)
}

/// Write an 8-bit grayscale image as PNG.
pub fn write_png<W: Write>(image: &GrayImage, writer: W) -> IoResult<()> {
    write_gray8(writer, image.width(), image.height(), image.samples())
}

/// Write a region mask as an 8-bit grayscale PNG.
///
/// The pixel values are the region identifiers themselves; the grayscale
/// container keeps them exact.
pub fn write_mask_png<W: Write>(mask: &RegionMask, writer: W) -> IoResult<()> {
    write_gray8(writer, mask.width(), mask.height(), mask.data())
}

fn write_gray8<W: Write>(writer: W, width: u32, height: u32, samples: &[u8]) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    writer
        .write_image_data(samples)
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {e}")))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {e}")))?;
    Ok(())
}

/// Rec. 601 luma reduction, rounded.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}
