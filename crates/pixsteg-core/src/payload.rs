//! The hidden image bitstream.
//!
//! For each channel `c`, every payload value (row-major) occupies `pixel_size`
//! consecutive LSBs of carrier channel `c`, starting right after the header.

use log::trace;

use crate::addressing::address;
use crate::bits::{from_bits, msb_first, set_lsb};
use crate::{CodecOptions, PixelGrid, Result, SteganoError};

/// Hides all channel values of `payload` in a copy of `carrier` and returns the copy.
///
/// The carrier itself is never touched. Its header region is carried over as is.
pub fn write_payload(
    payload: &PixelGrid,
    carrier: &PixelGrid,
    options: &CodecOptions,
) -> Result<PixelGrid> {
    let CodecOptions {
        depth,
        header_size,
        pixel_size,
    } = *options;
    ensure_positive("header_size", header_size)?;
    ensure_pixel_size(pixel_size)?;
    ensure_depth(payload, depth)?;
    ensure_depth(carrier, depth)?;

    let (src_width, src_height, _) = payload.resolution();
    let (dst_width, dst_height, _) = carrier.resolution();
    ensure_capacity(src_width, src_height, dst_width, dst_height, options)?;

    let mut encoded = carrier.clone();
    for channel in 0..depth {
        trace!("hiding channel {channel}");
        for position in 0..src_width * src_height {
            let (src_row, src_column) = address(position, src_width);
            let value = payload.get(src_row, src_column, channel);
            let offset = header_size + position * pixel_size;

            for (bit_index, bit) in msb_first(u32::from(value), 8).take(pixel_size).enumerate() {
                let (row, column) = address(offset + bit_index, dst_width);
                let color = encoded.get_mut(row, column, channel);
                *color = set_lsb(*color, i32::from(bit));
            }
        }
    }

    Ok(encoded)
}

/// Rebuilds a `src_height x src_width` image from the LSBs of `carrier`,
/// addressing the carrier with `dst_width`.
pub fn read_payload(
    carrier: &PixelGrid,
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    options: &CodecOptions,
) -> Result<PixelGrid> {
    let CodecOptions {
        depth,
        header_size,
        pixel_size,
    } = *options;
    ensure_positive("src_width", src_width)?;
    ensure_positive("src_height", src_height)?;
    ensure_positive("dst_width", dst_width)?;
    ensure_positive("depth", depth)?;
    ensure_positive("header_size", header_size)?;
    ensure_pixel_size(pixel_size)?;
    ensure_depth(carrier, depth)?;
    if dst_width > carrier.width() {
        return Err(SteganoError::InvalidDimension {
            name: "dst_width",
            value: dst_width,
        });
    }
    ensure_capacity(src_width, src_height, dst_width, carrier.height(), options)?;

    let mut image = PixelGrid::new(src_height, src_width, depth)?;
    for channel in 0..depth {
        trace!("unveiling channel {channel}");
        for position in 0..src_width * src_height {
            let offset = header_size + position * pixel_size;
            let bits = (offset..offset + pixel_size).map(|location| {
                let (row, column) = address(location, dst_width);
                carrier.get(row, column, channel) & 1
            });
            let value = from_bits(bits) << (8 - pixel_size);

            let (src_row, src_column) = address(position, src_width);
            image.set(src_row, src_column, channel, value as u8);
        }
    }

    Ok(image)
}

/// number of LSBs per channel a payload of the given size occupies, header included
pub fn required_bits(src_width: usize, src_height: usize, options: &CodecOptions) -> Option<usize> {
    src_width
        .checked_mul(src_height)?
        .checked_mul(options.pixel_size)?
        .checked_add(options.header_size)
}

fn ensure_capacity(
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    options: &CodecOptions,
) -> Result<()> {
    let available = dst_width * dst_height;
    match required_bits(src_width, src_height, options) {
        Some(required) if required <= available => Ok(()),
        required => Err(SteganoError::PayloadExceedsCarrier {
            required: required.unwrap_or(usize::MAX),
            available,
        }),
    }
}

fn ensure_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(SteganoError::InvalidDimension { name, value });
    }

    Ok(())
}

fn ensure_pixel_size(pixel_size: usize) -> Result<()> {
    if pixel_size == 0 || pixel_size > 8 {
        return Err(SteganoError::InvalidDimension {
            name: "pixel_size",
            value: pixel_size,
        });
    }

    Ok(())
}

fn ensure_depth(grid: &PixelGrid, depth: usize) -> Result<()> {
    if depth == 0 || grid.depth() < depth {
        return Err(SteganoError::InvalidChannel {
            channel: depth.saturating_sub(1),
            depth: grid.depth(),
        });
    }

    Ok(())
}
