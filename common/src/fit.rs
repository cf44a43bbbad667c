//! Square fit: center-crop and downscale a photo to the block-ram resolution.

use image::GrayImage;
use image::imageops::{self, FilterType};

use crate::PixelGrid;

/// Crop the largest centered square out of `img` and resize it to
/// `side` x `side` with nearest-neighbor sampling.
///
/// Nearest keeps hard edges intact, which matters more than smoothness
/// for a low-resolution hardware pixel array.
pub fn fit_square(img: &GrayImage, side: u32) -> PixelGrid {
    let (w, h) = img.dimensions();
    let min_dim = w.min(h);
    let left = (w - min_dim) / 2;
    let top = (h - min_dim) / 2;

    let cropped = imageops::crop_imm(img, left, top, min_dim, min_dim).to_image();
    let resized = imageops::resize(&cropped, side, side, FilterType::Nearest);

    PixelGrid::from_flat(side as usize, resized.into_raw())
}
