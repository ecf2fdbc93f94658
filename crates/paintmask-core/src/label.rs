//! Per-pixel component labels
//!
//! [`LabelMap`] is the result of connected-component labeling over the
//! non-ink plane. Label 0 is reserved for the unlabeled (ink) pixels;
//! labels 1..K identify components in discovery order.

use crate::error::{Error, Result};

/// A grid of component labels, same shape as the source raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Create a map with every pixel labeled 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            labels: vec![0; width as usize * height as usize],
        })
    }

    /// Map width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The row-major label buffer.
    pub fn values(&self) -> &[u32] {
        &self.labels
    }

    /// Mutable access to the row-major label buffer.
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.labels
    }

    /// Get the label at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[y as usize * self.width as usize + x as usize])
    }

    /// Set the label at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates fall outside the
    /// canvas.
    pub fn set(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.labels[y as usize * self.width as usize + x as usize] = label;
        Ok(())
    }

    /// Highest label present in the map.
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }
}
