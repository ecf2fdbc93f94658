//! Paintmask Core - raster containers for the coloring-page mask pipeline
//!
//! This crate provides the data structures shared by the extraction
//! pipeline, one per stage:
//!
//! - [`GrayImage`] - 8-bit single-channel outline raster (pipeline input)
//! - [`BitMask`] - binary ink mask derived by thresholding
//! - [`LabelMap`] - per-pixel connected-component labels
//! - [`RegionMask`] - the output product: a byte identifier per pixel,
//!   0 meaning "not paintable"
//! - [`Rect`] - component bounding rectangles
//!
//! All containers are plain owned values over row-major buffers. A
//! constructed container is always structurally valid: zero-area
//! dimensions and mismatched buffer lengths are rejected at construction,
//! so downstream stages never re-validate shape.

pub mod error;
pub mod gray;
pub mod label;
pub mod mask;
pub mod rect;
pub mod region;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use label::LabelMap;
pub use mask::BitMask;
pub use rect::Rect;
pub use region::{MAX_REGIONS, RegionMask, RegionStats};
