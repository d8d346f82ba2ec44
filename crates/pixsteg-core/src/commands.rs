use std::path::Path;

use log::info;

use crate::media::image::{open_grid, FilterType, ImageResize};
use crate::media::Persist;
use crate::{quality, CodecOptions, LsbCodec, SteganoError};

/// hides the image at `payload` inside the image at `carrier` and stores the result as PNG
pub fn hide(
    carrier: &Path,
    payload: &Path,
    output: &Path,
    options: CodecOptions,
    filter: FilterType,
) -> Result<(), SteganoError> {
    let carrier = open_grid(carrier)?;
    let payload = open_grid(payload)?;

    let encoded = LsbCodec::with_options(options)
        .with_resizer(ImageResize::new(filter))
        .encode(&carrier, &payload)?;
    encoded.save_as(output)?;
    info!(
        "hid a {}x{} image in a {}x{} carrier",
        payload.width(),
        payload.height(),
        encoded.width(),
        encoded.height()
    );

    Ok(())
}

/// unveils the image hidden in `secret_media` and stores it as PNG at `destination_file`
pub fn unveil(
    secret_media: &Path,
    destination_file: &Path,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    let encoded = open_grid(secret_media)?;
    let unveiled = LsbCodec::with_options(options).decode(&encoded)?;
    unveiled.save_as(destination_file)?;
    info!(
        "unveiled a {}x{} image",
        unveiled.width(),
        unveiled.height()
    );

    Ok(())
}

/// PSNR in dB between two image files, see [`quality::psnr`]
pub fn psnr(source: &Path, reference: &Path) -> Result<f64, SteganoError> {
    let source = open_grid(source)?;
    let reference = open_grid(reference)?;

    Ok(quality::psnr(&source, &reference))
}
