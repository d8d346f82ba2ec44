//! Image quality metrics, used to judge how visible the hidden data is.
//!
//! Grids of different shape are not comparable, both metrics answer them with
//! `f64::NEG_INFINITY` instead of an error.

use crate::PixelGrid;

/// mean of the squared channel differences
pub fn mean_squared_error(source: &PixelGrid, reference: &PixelGrid) -> f64 {
    if source.dimensions() != reference.dimensions() {
        return f64::NEG_INFINITY;
    }

    let sum: f64 = source
        .as_raw()
        .iter()
        .zip(reference.as_raw())
        .map(|(a, b)| {
            let d = f64::from(*a) - f64::from(*b);
            d * d
        })
        .sum();

    sum / source.as_raw().len() as f64
}

/// Peak signal to noise ratio in dB, the peak being the value range of `source`.
///
/// A flat `source` has no range and yields `NEG_INFINITY`, identical grids yield
/// `INFINITY`.
pub fn psnr(source: &PixelGrid, reference: &PixelGrid) -> f64 {
    if source.dimensions() != reference.dimensions() {
        return f64::NEG_INFINITY;
    }

    let mse = mean_squared_error(source, reference);
    let raw = source.as_raw();
    let (min, max) = raw
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let pixel_range = f64::from(max - min);

    if pixel_range == 0.0 {
        return f64::NEG_INFINITY;
    }
    if mse == 0.0 {
        return f64::INFINITY;
    }

    10.0 * (pixel_range * pixel_range / mse).log10()
}
