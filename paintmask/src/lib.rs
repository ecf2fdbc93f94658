//! Paintmask - coloring-page region-mask extraction
//!
//! Paintmask prepares page assets for a coloring app: given a
//! rasterized black-on-white outline, it derives a mask in which every
//! enclosed paintable region carries a unique byte identifier and all
//! ink, open background, and noise pixels are 0. The app runtime paints
//! a tapped region by looking up its identifier and flood-limiting the
//! fill to pixels that share it.
//!
//! # Example
//!
//! ```
//! use paintmask::GrayImage;
//! use paintmask::region::{ExtractOptions, extract};
//!
//! // An untouched page: the single background component touches the
//! // canvas edge, so nothing is paintable.
//! let page = GrayImage::new(64, 64, 255).unwrap();
//! let mask = extract(&page, &ExtractOptions::default());
//! assert_eq!(mask.region_count(), 0);
//! ```

// Re-export core types (the containers used everywhere)
pub use paintmask_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use paintmask_io as io;
pub use paintmask_morph as morph;
pub use paintmask_region as region;
