pub mod blur;
pub mod coe;
pub mod fit;
pub mod grid;
pub mod recv;

pub use grid::PixelGrid;

/// Side length of the block-ram image in pixels
pub const TARGET_SIDE: usize = 64;

/// Number of samples in a full image
pub const PIXELS: usize = TARGET_SIDE * TARGET_SIDE;
