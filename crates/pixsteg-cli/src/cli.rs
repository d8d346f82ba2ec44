use clap::{Parser, Subcommand};
use pixsteg_core::codec_options::{DEFAULT_HEADER_SIZE, DEFAULT_PIXEL_SIZE};
use pixsteg_core::CodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: number of bits per header value, must match on hide and unveil
    #[arg(long = "x-header-size", global = true, default_value_t = DEFAULT_HEADER_SIZE)]
    pub header_size: usize,

    /// Experimental: number of bits stored per color value (1-8), below 8 is lossy
    #[arg(long = "x-pixel-size", global = true, default_value_t = DEFAULT_PIXEL_SIZE)]
    pub pixel_size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_header_size(self.header_size)
            .with_pixel_size(self.pixel_size)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Psnr(psnr::PsnrArgs),
}
