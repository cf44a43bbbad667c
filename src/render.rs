//! Preview rendering for the blurred result.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use ripple_common::PixelGrid;

const SCALE: u32 = 8;
const BAR_WIDTH: u32 = 16;
const GUTTER: u32 = 4;

/// Upscale the grid for viewing and attach a value-intensity scale strip
/// (brightest at the top) along the right edge.
pub fn render_preview(grid: &PixelGrid) -> RgbImage {
    let side = grid.side() as u32 * SCALE;
    let upscaled = imageops::resize(&grid.to_image(), side, side, FilterType::Nearest);

    let mut canvas = RgbImage::from_pixel(side + GUTTER + BAR_WIDTH, side, Rgb([0, 0, 0]));
    for (x, y, pixel) in upscaled.enumerate_pixels() {
        canvas.put_pixel(x, y, Rgb([pixel.0[0]; 3]));
    }

    for y in 0..side {
        let level = (255 - y * 255 / (side - 1)) as u8;
        for x in 0..BAR_WIDTH {
            canvas.put_pixel(side + GUTTER + x, y, Rgb([level; 3]));
        }
    }

    canvas
}
