//! The fixed width header that records the hidden image's shape.
//!
//! Payload height lives in the LSBs of the first `header_size` pixels of channel 0,
//! payload width in the same pixels of channel 1, both most significant bit first.

use log::debug;

use crate::addressing::address;
use crate::bits::{from_bits, msb_first, set_lsb, MAX_BIT_WIDTH};
use crate::{PixelGrid, Result, SteganoError};

/// channel that carries the payload height
pub const HEIGHT_CHANNEL: usize = 0;

/// channel that carries the payload width
pub const WIDTH_CHANNEL: usize = 1;

/// Writes `payload_height` and `payload_width` into the carrier, mutating it in place.
///
/// Fails if the header does not fit into the first row of the carrier, if the carrier
/// has fewer than two channels or if a dimension needs more than `header_size` bits.
pub fn write_header(
    carrier: &mut PixelGrid,
    payload_height: usize,
    payload_width: usize,
    header_size: usize,
) -> Result<()> {
    let width = carrier.width();
    ensure_header_size(header_size, width)?;
    ensure_channel(WIDTH_CHANNEL, carrier.depth())?;

    for (dimension, channel) in [
        (payload_height, HEIGHT_CHANNEL),
        (payload_width, WIDTH_CHANNEL),
    ] {
        let value = header_value(dimension, header_size)?;
        for (position, bit) in msb_first(value, header_size).enumerate() {
            let (row, column) = address(position, width);
            let color = carrier.get_mut(row, column, channel);
            *color = set_lsb(*color, i32::from(bit));
        }
    }
    debug!("header written: {payload_height}x{payload_width} in {header_size} bits");

    Ok(())
}

/// Reads one header value back from `channel`, addressing the carrier with `width`.
pub fn read_header(
    carrier: &PixelGrid,
    width: usize,
    header_size: usize,
    channel: usize,
) -> Result<usize> {
    ensure_header_size(header_size, width)?;
    ensure_channel(channel, carrier.depth())?;
    if width > carrier.width() {
        return Err(SteganoError::InvalidDimension {
            name: "width",
            value: width,
        });
    }

    let value = from_bits((0..header_size).map(|position| {
        let (row, column) = address(position, width);
        carrier.get(row, column, channel) & 1
    }));

    Ok(value as usize)
}

fn header_value(dimension: usize, header_size: usize) -> Result<u32> {
    let value = u32::try_from(dimension).map_err(|_| SteganoError::DimensionOverflow(dimension))?;
    if header_size < MAX_BIT_WIDTH && value >> header_size != 0 {
        return Err(SteganoError::DimensionOverflow(dimension));
    }

    Ok(value)
}

fn ensure_header_size(header_size: usize, width: usize) -> Result<()> {
    if header_size == 0 || header_size > width || header_size > MAX_BIT_WIDTH {
        return Err(SteganoError::InvalidHeaderSize { header_size, width });
    }

    Ok(())
}

fn ensure_channel(channel: usize, depth: usize) -> Result<()> {
    if channel >= depth {
        return Err(SteganoError::InvalidChannel { channel, depth });
    }

    Ok(())
}
