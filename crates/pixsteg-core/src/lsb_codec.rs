use log::debug;

use crate::capacity::{resize_carrier, Resize};
use crate::header::{read_header, write_header, HEIGHT_CHANNEL, WIDTH_CHANNEL};
use crate::media::image::ImageResize;
use crate::payload::{read_payload, write_payload};
use crate::{CodecOptions, PixelGrid, Result, SteganoError};

/// Hides one image inside another one, and gets it back.
///
/// ## Example of usage
/// ```rust
/// use pixsteg_core::{LsbCodec, PixelGrid};
///
/// let carrier = PixelGrid::new(64, 64, 3).expect("Cannot create carrier");
/// let secret = PixelGrid::from_fn(8, 8, 3, |r, c, ch| (r * 8 + c + ch) as u8)
///     .expect("Cannot create secret");
///
/// let codec = LsbCodec::default();
/// let stego = codec.encode(&carrier, &secret).expect("Cannot hide the secret");
/// let unveiled = codec.decode(&stego).expect("Cannot unveil the secret");
///
/// assert_eq!(unveiled, secret);
/// ```
pub struct LsbCodec {
    options: CodecOptions,
    resizer: Box<dyn Resize>,
}

impl Default for LsbCodec {
    fn default() -> Self {
        Self::with_options(CodecOptions::default())
    }
}

impl LsbCodec {
    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            options,
            resizer: Box::new(ImageResize::default()),
        }
    }

    /// swaps the resampling strategy used to enlarge small carriers
    pub fn with_resizer<R: Resize + 'static>(mut self, resizer: R) -> Self {
        self.resizer = Box::new(resizer);
        self
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Enlarges the carrier if needed, writes the header and then the payload.
    /// The returned grid is a new buffer, `carrier` stays untouched.
    pub fn encode(&self, carrier: &PixelGrid, payload: &PixelGrid) -> Result<PixelGrid> {
        self.ensure_grid("carrier", carrier)?;
        self.ensure_grid("payload", payload)?;

        let mut resized = resize_carrier(carrier, payload, &self.options, &*self.resizer)?;
        if resized.depth() != carrier.depth() {
            return Err(SteganoError::ResizeError(format!(
                "resampling changed the channel count from {} to {}",
                carrier.depth(),
                resized.depth()
            )));
        }

        write_header(
            &mut resized,
            payload.height(),
            payload.width(),
            self.options.header_size,
        )?;

        write_payload(payload, &resized, &self.options)
    }

    /// Reads the payload shape from the header and rebuilds the hidden image.
    ///
    /// A carrier that holds no hidden image usually decodes to a header promising more
    /// data than available, this is reported as [`SteganoError::PayloadExceedsCarrier`].
    pub fn decode(&self, encoded: &PixelGrid) -> Result<PixelGrid> {
        let dst_width = encoded.width();
        let header_size = self.options.header_size;

        let src_height = read_header(encoded, dst_width, header_size, HEIGHT_CHANNEL)?;
        let src_width = read_header(encoded, dst_width, header_size, WIDTH_CHANNEL)?;
        debug!("header found: hidden image is {src_height}x{src_width}");

        read_payload(encoded, src_width, src_height, dst_width, &self.options)
    }

    fn ensure_grid(&self, name: &str, grid: &PixelGrid) -> Result<()> {
        let needed = self.options.depth.max(WIDTH_CHANNEL + 1);
        if grid.depth() < needed {
            return Err(SteganoError::InvalidGrid(format!(
                "{name} has {} channels, at least {needed} are required",
                grid.depth()
            )));
        }

        Ok(())
    }
}

/// hides `payload` in `carrier` with the default options
pub fn encode(carrier: &PixelGrid, payload: &PixelGrid) -> Result<PixelGrid> {
    LsbCodec::default().encode(carrier, payload)
}

/// unveils the image hidden in `encoded` with the default options
pub fn decode(encoded: &PixelGrid) -> Result<PixelGrid> {
    LsbCodec::default().decode(encoded)
}
