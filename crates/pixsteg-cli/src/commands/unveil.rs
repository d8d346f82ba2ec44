use std::path::PathBuf;

use clap::Args;
use pixsteg_core::CodecOptions;

use crate::CliResult;

/// Unveils an image hidden inside a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the hidden image
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        pixsteg_core::commands::unveil(&self.media, &self.output_file, options)
    }
}
