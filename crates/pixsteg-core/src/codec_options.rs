/// Default number of color channels carrying payload bits
pub const DEFAULT_DEPTH: usize = 3;

/// Default header width in bits, one header per dimension
pub const DEFAULT_HEADER_SIZE: usize = 32;

/// Default number of bits stored per payload channel value
pub const DEFAULT_PIXEL_SIZE: usize = 8;

/// Codec configuration for hiding an image inside another image.
///
/// Encoder and decoder must agree on all values, otherwise the recovered image is garbage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodecOptions {
    /// Number of channels of the payload that get hidden, each one in the same channel
    /// of the carrier. The header uses channels 0 and 1, so at least 2 are required.
    pub depth: usize,

    /// Width in bits of each of the two headers (payload height and payload width).
    /// Must lie in `1..=32` and must not exceed the carrier width.
    pub header_size: usize,

    /// Number of bits written per payload channel value, `1..=8`.
    /// Values below 8 keep only the most significant bits and are lossy.
    pub pixel_size: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            header_size: DEFAULT_HEADER_SIZE,
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }
}

impl CodecOptions {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn with_pixel_size(mut self, pixel_size: usize) -> Self {
        self.pixel_size = pixel_size;
        self
    }
}
