mod cli;
mod commands;

use clap::Parser;
use log::debug;
use pixsteg_core::SteganoError;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();
    debug!("running with {options:?}");

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Psnr(psnr) => psnr.run(),
    }
}
