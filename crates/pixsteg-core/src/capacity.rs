//! Carrier capacity planning.
//!
//! Every carrier pixel offers one LSB per channel. The header and the payload values
//! of one channel have to fit into that, otherwise the carrier is enlarged by an
//! integer scale factor applied to both width and height.

use log::debug;

use crate::{CodecOptions, PixelGrid, Result};

/// The resampling collaborator used to enlarge a carrier.
///
/// Implementations must keep the channel count and return a grid of exactly
/// `width x height` pixels.
pub trait Resize {
    fn resize(&self, grid: &PixelGrid, width: usize, height: usize) -> Result<PixelGrid>;
}

/// Computes the integer factor a carrier must be scaled by to hold the header and
/// `payload_pixel_count` values of `pixel_size` bits each.
///
/// ```rust
/// use pixsteg_core::capacity::plan_resize;
///
/// // 50x50 payload in a 100x100 carrier: 20032 bits on 10000 pixels
/// assert_eq!(plan_resize(100, 100, 10_000, 2_500, 8, 32), 3);
/// ```
pub fn plan_resize(
    _carrier_width: usize,
    _carrier_height: usize,
    carrier_pixel_count: usize,
    payload_pixel_count: usize,
    pixel_size: usize,
    header_size: usize,
) -> usize {
    let required_bits = payload_pixel_count * pixel_size + header_size;
    let scale_factor = required_bits.div_ceil(carrier_pixel_count.max(1));

    scale_factor.max(1)
}

/// Target dimensions of a carrier after planning
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResizePlan {
    pub scale_factor: usize,
    pub width: usize,
    pub height: usize,
}

impl ResizePlan {
    /// plans the carrier size for hiding `payload` in `carrier`
    ///
    /// On top of the pure capacity formula the carrier row must be wide enough to
    /// hold a header, so narrow carriers get a larger factor.
    pub fn new(carrier: &PixelGrid, payload: &PixelGrid, options: &CodecOptions) -> Self {
        let (width, height, pixel_count) = carrier.resolution();
        let (_, _, payload_pixel_count) = payload.resolution();

        let capacity_factor = plan_resize(
            width,
            height,
            pixel_count,
            payload_pixel_count,
            options.pixel_size,
            options.header_size,
        );
        let header_factor = options.header_size.div_ceil(width);
        let scale_factor = capacity_factor.max(header_factor).max(1);

        Self {
            scale_factor,
            width: scale_factor * width,
            height: scale_factor * height,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.scale_factor == 1
    }
}

/// Returns a carrier big enough to hold `payload`, either a copy of `carrier` or a
/// resampled version produced by `resizer`.
pub fn resize_carrier(
    carrier: &PixelGrid,
    payload: &PixelGrid,
    options: &CodecOptions,
    resizer: &dyn Resize,
) -> Result<PixelGrid> {
    let plan = ResizePlan::new(carrier, payload, options);
    debug!(
        "carrier {}x{} scaled by {} to {}x{}",
        carrier.width(),
        carrier.height(),
        plan.scale_factor,
        plan.width,
        plan.height
    );

    if plan.is_identity() {
        return Ok(carrier.clone());
    }

    resizer.resize(carrier, plan.width, plan.height)
}
