use super::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("scoreviz_compose_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn gradient(w: u32, h: u32, seed: u8) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([seed, (x % 256) as u8, (y % 256) as u8])
    })
}

#[test]
fn test_dimensions_are_sum_and_max() {
    let a = gradient(4, 3, 10);
    let b = gradient(5, 7, 20);
    let merged = compose_horizontal(&a, &b);
    assert_eq!(merged.dimensions(), (9, 7));
}

#[test]
fn test_left_pixels_unchanged_and_padding_white() {
    let a = gradient(4, 3, 10);
    let b = gradient(5, 7, 20);
    let merged = compose_horizontal(&a, &b);

    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(merged.get_pixel(x, y), a.get_pixel(x, y));
        }
    }
    // Below the shorter left image the canvas stays white.
    assert_eq!(*merged.get_pixel(0, 6), Rgb([255, 255, 255]));
    // Right image starts at the left image's width.
    assert_eq!(merged.get_pixel(4, 0), b.get_pixel(0, 0));
    assert_eq!(merged.get_pixel(8, 6), b.get_pixel(4, 6));
}

#[test]
fn test_merge_files_round_trip() {
    let dir = make_temp_dir();
    let left = dir.join("left.png");
    let right = dir.join("right.png");
    gradient(6, 2, 1).save(&left).unwrap();
    gradient(3, 5, 2).save(&right).unwrap();

    let out = dir.join("nested/merged.png");
    let dims = merge_files(&left, &right, &out).unwrap();
    assert_eq!(dims, (9, 5));

    let loaded = image::open(&out).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (9, 5));
    assert_eq!(loaded.get_pixel(7, 4), gradient(3, 5, 2).get_pixel(1, 4));
}

#[test]
fn test_missing_input_fails() {
    let dir = make_temp_dir();
    let err = merge_files(&dir.join("a.png"), &dir.join("b.png"), &dir.join("c.png"));
    assert!(err.is_err());
}
