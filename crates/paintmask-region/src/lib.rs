//! paintmask-region - connected components and paintable-region extraction
//!
//! This crate holds the algorithmic core of the pipeline:
//!
//! - [`label_components`] - union-find connected-component labeling of a
//!   binary mask, 4- or 8-way
//! - [`component_stats`] - per-component pixel counts and bounds
//! - [`extract`] - the full outline-to-region-mask derivation: threshold,
//!   seal gaps, label the non-ink plane, discard open background, filter
//!   noise, and assign dense byte identifiers by descending area
//!
//! Extraction is a pure function of the input image and its
//! [`ExtractOptions`]; it owns private working buffers and is safe to run
//! concurrently across a batch of pages.

pub mod conncomp;
pub mod extract;

pub use conncomp::{Component, Connectivity, component_stats, label_components};
pub use extract::{ExtractOptions, extract};
