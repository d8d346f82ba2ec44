//! Bit and integer helpers shared by the header and payload codecs.
//!
//! All conversions are most-significant-bit first.

/// widest value a header can carry
pub const MAX_BIT_WIDTH: usize = u32::BITS as usize;

/// yields the lowest `width` bits of `value`, most significant bit first
///
/// `width` is capped at 32, higher bits of `value` are dropped.
pub fn msb_first(value: u32, width: usize) -> impl Iterator<Item = u8> {
    let width = width.min(MAX_BIT_WIDTH);
    (0..width).rev().map(move |shift| ((value >> shift) & 1) as u8)
}

/// formats `value` as a zero padded binary string of exactly `width` characters
///
/// ```rust
/// use pixsteg_core::bits::to_binary_string;
///
/// assert_eq!(to_binary_string(100, 8), "01100100");
/// ```
pub fn to_binary_string(value: u32, width: usize) -> String {
    msb_first(value, width)
        .map(|bit| if bit == 1 { '1' } else { '0' })
        .collect()
}

/// reads a MSB first string of `'0'`/`'1'` characters back into an integer
///
/// Any character other than `'1'` counts as a zero bit. Only the last 32 characters
/// contribute, longer strings overflow the result.
pub fn from_binary_string(bits: &str) -> u32 {
    from_bits(bits.bytes().map(|b| u8::from(b == b'1')))
}

/// accumulates MSB first bits into an integer
pub fn from_bits<I: IntoIterator<Item = u8>>(bits: I) -> u32 {
    bits.into_iter()
        .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit & 1))
}

/// replaces the least significant bit of `value` by `new_bit`
///
/// A `new_bit` other than `0` or `1` leaves `value` untouched, callers rely on
/// this never failing.
pub fn set_lsb(value: u8, new_bit: i32) -> u8 {
    match new_bit {
        0 | 1 => (value & !1) | new_bit as u8,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_32_bit_headers() {
        assert_eq!(to_binary_string(10, 32), "00000000000000000000000000001010");
        assert_eq!(to_binary_string(11, 32), "00000000000000000000000000001011");
    }

    #[test]
    fn should_format_8_bit_pixels() {
        assert_eq!(to_binary_string(1, 8), "00000001");
        assert_eq!(to_binary_string(10, 8), "00001010");
        assert_eq!(to_binary_string(100, 8), "01100100");
    }

    #[test]
    fn should_truncate_to_low_order_bits() {
        assert_eq!(to_binary_string(0x1FF, 8), "11111111");
        assert_eq!(to_binary_string(0b1010, 2), "10");
    }

    #[test]
    fn should_parse_msb_first() {
        assert_eq!(from_binary_string("00000001"), 1);
        assert_eq!(from_binary_string("00001010"), 10);
        assert_eq!(from_binary_string("01100100"), 100);
        assert_eq!(from_binary_string(""), 0);
    }

    #[test]
    fn binary_string_round_trips_32_bit_values() {
        let mut rng = fastrand::Rng::with_seed(42);
        for v in [0, 1, 50, 300, u32::MAX - 1, u32::MAX]
            .into_iter()
            .chain((0..1000).map(|_| rng.u32(..)))
        {
            assert_eq!(from_binary_string(&to_binary_string(v, 32)), v, "value {v}");
        }
    }

    #[test]
    fn should_modify_the_last_bit() {
        assert_eq!(set_lsb(10, 0), 10);
        assert_eq!(set_lsb(10, 1), 11);
        assert_eq!(set_lsb(11, 0), 10);
        assert_eq!(set_lsb(255, 0), 254);
    }

    #[test]
    fn out_of_range_bits_are_a_silent_no_op() {
        assert_eq!(set_lsb(10, -1), 10);
        assert_eq!(set_lsb(10, 3), 10);
        assert_eq!(set_lsb(11, 2), 11);
    }
}
