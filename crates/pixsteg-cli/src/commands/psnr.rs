use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Compares two images by their peak signal to noise ratio
#[derive(Args, Debug)]
pub struct PsnrArgs {
    /// Source image, its value range is the peak signal
    pub source: PathBuf,

    /// Reference image, for example the image with a hidden image inside
    pub reference: PathBuf,
}

impl PsnrArgs {
    pub fn run(self) -> CliResult<()> {
        let db = pixsteg_core::commands::psnr(&self.source, &self.reference)?;
        println!("{db:.4} dB");

        Ok(())
    }
}
