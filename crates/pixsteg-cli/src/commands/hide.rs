use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pixsteg_core::media::image::FilterType;
use pixsteg_core::CodecOptions;

use crate::CliResult;

/// Hides an image inside a carrier image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image that stays visible, used readonly. Gets enlarged if too small.
    #[arg(short = 'c', long = "carrier", value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Image to hide inside the carrier
    #[arg(short = 's', long = "secret", value_name = "secret image", required = true)]
    pub secret: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Resampling filter used when the carrier needs to be enlarged
    #[arg(long, value_enum, default_value_t = Filter::Bilinear)]
    pub filter: Filter,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Filter {
    Nearest,
    Bilinear,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Bilinear => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        pixsteg_core::commands::hide(
            &self.carrier,
            &self.secret,
            &self.write_to_file,
            options,
            self.filter.into(),
        )
    }
}
