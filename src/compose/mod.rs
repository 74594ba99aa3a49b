use std::fs;
use std::path::Path;

use image::{ImageError, Rgb, RgbImage, imageops};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] ImageError),
}

const CANVAS: Rgb<u8> = Rgb([255, 255, 255]);

/// Places `left` and `right` side by side on a white canvas, both aligned to
/// the top edge.
pub fn compose_horizontal(left: &RgbImage, right: &RgbImage) -> RgbImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());
    let mut canvas = RgbImage::from_pixel(width, height, CANVAS);
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, i64::from(left.width()), 0);
    canvas
}

/// Loads two images, composes them and writes the result; the format follows
/// the output extension. Alpha channels are dropped.
pub fn merge_files(left: &Path, right: &Path, out: &Path) -> Result<(u32, u32), ComposeError> {
    let a = image::open(left)?.to_rgb8();
    let b = image::open(right)?.to_rgb8();
    let merged = compose_horizontal(&a, &b);
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    merged.save(out)?;
    Ok(merged.dimensions())
}

#[cfg(test)]
#[path = "../../tests/src_inline/compose/tests.rs"]
mod tests;
