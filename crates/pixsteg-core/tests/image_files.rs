use std::fs;

use tempfile::TempDir;

use pixsteg_core::commands::{hide, psnr, unveil};
use pixsteg_core::media::image::{open_grid, FilterType};
use pixsteg_core::media::Persist;
use pixsteg_core::*;

fn write_random_png(dir: &TempDir, name: &str, height: usize, width: usize, seed: u64) -> PixelGrid {
    let mut rng = fastrand::Rng::with_seed(seed);
    let grid = PixelGrid::from_fn(height, width, 3, |_, _, _| rng.u8(..)).unwrap();
    grid.save_as(&dir.path().join(name))
        .expect("Cannot write test image");
    grid
}

#[test]
fn should_hide_and_unveil_an_image_file() -> Result<()> {
    let out_dir = TempDir::new()?;
    write_random_png(&out_dir, "carrier.png", 100, 100, 1);
    let secret = write_random_png(&out_dir, "secret.png", 50, 50, 2);
    let stego_path = out_dir.path().join("stego.png");
    let unveiled_path = out_dir.path().join("unveiled.png");

    hide(
        &out_dir.path().join("carrier.png"),
        &out_dir.path().join("secret.png"),
        &stego_path,
        CodecOptions::default(),
        FilterType::Triangle,
    )?;
    let l = fs::metadata(&stego_path)
        .expect("Output image was not written.")
        .len();
    assert!(l > 0, "File is not supposed to be empty");
    assert_eq!(open_grid(&stego_path)?.dimensions(), (300, 300, 3));

    unveil(&stego_path, &unveiled_path, CodecOptions::default())?;
    assert_eq!(open_grid(&unveiled_path)?, secret);

    Ok(())
}

#[test]
fn stego_image_stays_close_to_the_carrier() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = write_random_png(&out_dir, "carrier.png", 120, 120, 3);
    write_random_png(&out_dir, "secret.png", 30, 30, 4);
    let stego_path = out_dir.path().join("stego.png");

    hide(
        &out_dir.path().join("carrier.png"),
        &out_dir.path().join("secret.png"),
        &stego_path,
        CodecOptions::default(),
        FilterType::Nearest,
    )?;

    assert_eq!(open_grid(&stego_path)?.dimensions(), carrier.dimensions());
    let db = psnr(&out_dir.path().join("carrier.png"), &stego_path)?;
    assert!(db > 45.0, "LSB changes must be nearly invisible, got {db} dB");

    Ok(())
}

#[test]
fn should_refuse_a_lossy_output_format() -> Result<()> {
    let out_dir = TempDir::new()?;
    write_random_png(&out_dir, "carrier.png", 40, 40, 5);
    write_random_png(&out_dir, "secret.png", 4, 4, 6);

    let result = hide(
        &out_dir.path().join("carrier.png"),
        &out_dir.path().join("secret.png"),
        &out_dir.path().join("stego.jpg"),
        CodecOptions::default(),
        FilterType::Triangle,
    );
    assert!(matches!(result, Err(SteganoError::UnsupportedMedia)));

    Ok(())
}

#[test]
fn psnr_of_different_shapes_is_negative_infinity() -> Result<()> {
    let out_dir = TempDir::new()?;
    write_random_png(&out_dir, "a.png", 10, 10, 7);
    write_random_png(&out_dir, "b.png", 10, 11, 8);

    let db = psnr(&out_dir.path().join("a.png"), &out_dir.path().join("b.png"))?;
    assert_eq!(db, f64::NEG_INFINITY);

    Ok(())
}
