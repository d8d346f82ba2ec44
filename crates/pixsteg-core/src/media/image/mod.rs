//! Bridge between [`PixelGrid`] and the `image` crate: file I/O, conversion and resampling.

mod resize;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel};
use log::error;

pub use image::imageops::FilterType;
pub use resize::ImageResize;

use super::{is_png_extension, Persist};
use crate::{PixelGrid, Result, SteganoError};

/// Reads any image the `image` crate can decode into a 3 channel RGB grid.
pub fn open_grid(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    ImageFormat::from_path(path).map_err(|_| SteganoError::UnsupportedMedia)?;

    let img = image::open(path).map_err(|e| {
        error!("Error opening image {path:?}: {e}");
        SteganoError::InvalidImageMedia
    })?;

    PixelGrid::try_from(img.to_rgb8())
}

impl PixelGrid {
    /// Converts the grid into the matching `DynamicImage` variant, depth 1 to 4 are
    /// supported (gray, gray + alpha, RGB, RGBA).
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let (width, height) = (to_u32(self.width())?, to_u32(self.height())?);
        let data = self.as_raw().to_vec();

        let img = match self.depth() {
            1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
            2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
            3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
            4 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
            depth => {
                return Err(SteganoError::UnsupportedChannelCount(
                    depth.min(u8::MAX as usize) as u8,
                ))
            }
        };

        img.ok_or(SteganoError::ImageEncodingError)
    }
}

impl<P> TryFrom<ImageBuffer<P, Vec<u8>>> for PixelGrid
where
    P: Pixel<Subpixel = u8>,
{
    type Error = SteganoError;

    fn try_from(buffer: ImageBuffer<P, Vec<u8>>) -> Result<Self> {
        let (width, height) = buffer.dimensions();
        PixelGrid::from_raw(
            height as usize,
            width as usize,
            P::CHANNEL_COUNT as usize,
            buffer.into_raw(),
        )
    }
}

impl TryFrom<DynamicImage> for PixelGrid {
    type Error = SteganoError;

    /// keeps 8-bit layouts as they are, everything else is converted to 8-bit RGB
    fn try_from(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(b) => b.try_into(),
            DynamicImage::ImageLumaA8(b) => b.try_into(),
            DynamicImage::ImageRgb8(b) => b.try_into(),
            DynamicImage::ImageRgba8(b) => b.try_into(),
            other => other.to_rgb8().try_into(),
        }
    }
}

impl Persist for PixelGrid {
    /// writes the grid as PNG, other formats would destroy the hidden bits
    fn save_as(&self, file: &Path) -> Result<()> {
        if !is_png_extension(file) {
            return Err(SteganoError::UnsupportedMedia);
        }

        let img = self.to_dynamic_image()?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;

        img.write_to(&mut BufWriter::new(f), ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}

fn to_u32(dimension: usize) -> Result<u32> {
    u32::try_from(dimension).map_err(|_| SteganoError::DimensionOverflow(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::random_grid;
    use image::{GrayImage, Rgb, RgbImage, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn should_take_over_rgb_buffers_row_major() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let grid = PixelGrid::try_from(img).expect("Cannot convert image");

        assert_eq!(grid.dimensions(), (2, 3, 3));
        assert_eq!(grid.get(1, 2, 0), 2, "column is x");
        assert_eq!(grid.get(1, 2, 1), 1, "row is y");
    }

    #[test]
    fn should_keep_the_channel_count() {
        let gray = PixelGrid::try_from(GrayImage::new(4, 4)).unwrap();
        let rgba = PixelGrid::try_from(RgbaImage::new(4, 4)).unwrap();

        assert_eq!(gray.depth(), 1);
        assert_eq!(rgba.depth(), 4);
        assert!(matches!(
            rgba.to_dynamic_image().unwrap(),
            DynamicImage::ImageRgba8(_)
        ));
    }

    #[test]
    fn should_reject_empty_images() {
        assert!(matches!(
            PixelGrid::try_from(RgbImage::new(0, 0)),
            Err(SteganoError::InvalidGrid(_))
        ));
    }

    #[test]
    fn should_reject_exotic_channel_counts() {
        let grid = PixelGrid::new(2, 2, 5).unwrap();
        assert!(matches!(
            grid.to_dynamic_image(),
            Err(SteganoError::UnsupportedChannelCount(5))
        ));
    }

    #[test]
    fn should_save_and_open_png_losslessly() {
        let out_dir = TempDir::new().expect("Cannot create temp dir");
        let path = out_dir.path().join("grid.png");
        let grid = random_grid(13, 21, 3, 4);

        grid.save_as(&path).expect("Cannot save grid");
        assert_eq!(open_grid(&path).expect("Cannot open grid"), grid);
    }

    #[test]
    fn should_refuse_lossy_targets() {
        let out_dir = TempDir::new().unwrap();
        let grid = random_grid(2, 2, 3, 4);

        assert!(matches!(
            grid.save_as(&out_dir.path().join("grid.jpg")),
            Err(SteganoError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_fail_for_unknown_or_missing_files() {
        assert!(matches!(
            open_grid("Cargo.toml"),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            open_grid("some_random_file.png"),
            Err(SteganoError::InvalidImageMedia)
        ));
    }
}
