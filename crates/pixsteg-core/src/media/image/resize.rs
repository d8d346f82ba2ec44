use image::imageops::FilterType;

use crate::capacity::Resize;
use crate::{PixelGrid, Result, SteganoError};

/// Resamples a grid with `image::DynamicImage::resize_exact`.
///
/// Defaults to a bilinear filter.
#[derive(Clone, Copy, Debug)]
pub struct ImageResize {
    pub filter: FilterType,
}

impl Default for ImageResize {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

impl ImageResize {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Resize for ImageResize {
    fn resize(&self, grid: &PixelGrid, width: usize, height: usize) -> Result<PixelGrid> {
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(SteganoError::ResizeError(format!(
                    "{width}x{height} exceeds the image size limits"
                )))
            }
        };

        let resized = grid.to_dynamic_image()?.resize_exact(w, h, self.filter);
        PixelGrid::try_from(resized)
    }
}
