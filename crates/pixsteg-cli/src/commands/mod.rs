pub mod hide;
pub mod psnr;
pub mod unveil;
