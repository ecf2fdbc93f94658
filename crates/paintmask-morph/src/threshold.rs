//! Fixed-threshold binarization

use paintmask_core::{BitMask, GrayImage};

/// Classify ink pixels by a fixed intensity threshold.
///
/// Outline art is dark lines on a light page, so ink is the
/// low-intensity class: a pixel is ink iff its sample is strictly below
/// `threshold`. A threshold of 0 therefore classifies nothing as ink.
pub fn binarize(image: &GrayImage, threshold: u8) -> BitMask {
    let mut mask = BitMask::new(image.width(), image.height())
        .expect("source image dimensions are already validated");
    let bits = mask.values_mut();
    for (bit, &sample) in bits.iter_mut().zip(image.samples()) {
        *bit = sample < threshold;
    }
    mask
}
