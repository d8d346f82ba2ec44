/// Translates a linear bit position of one channel into a `(row, column)` coordinate
/// of a grid with the given `width`.
///
/// Position `0` and width `0` both map to `(0, 0)`, so a row-major walk starting at
/// zero never needs a special case. Every encode and decode path goes through this
/// function, which keeps the bit layout symmetric.
///
/// ```rust
/// use pixsteg_core::addressing::address;
///
/// assert_eq!(address(250, 100), (2, 50));
/// ```
pub fn address(position: usize, width: usize) -> (usize, usize) {
    if position == 0 || width == 0 {
        return (0, 0);
    }

    (position / width, position % width)
}
