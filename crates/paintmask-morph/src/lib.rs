//! paintmask-morph - binarization and binary morphology
//!
//! This crate turns a grayscale outline raster into a sealed ink mask:
//!
//! - [`binarize`] - classify pixels as ink by intensity threshold
//! - [`dilate`] - grow the ink mask with 8-neighborhood passes, closing
//!   the 1-pixel discontinuities that anti-aliased rendering leaves in
//!   otherwise closed outlines
//!
//! Both operations are infallible: the container types guarantee a valid
//! non-empty canvas, so there is no shape or depth checking to fail.

mod binary;
mod threshold;

pub use binary::dilate;
pub use threshold::binarize;
