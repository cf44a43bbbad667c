use image::GrayImage;

/// Square grid of 8-bit samples, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    side: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a flat row-major buffer. `data` must hold exactly `side * side` samples.
    pub fn from_flat(side: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            side * side,
            "flat buffer does not match grid dimensions"
        );
        Self { side, data }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.side + x]
    }

    /// Flattened samples, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_raw(self.side as u32, self.side as u32, self.data.clone())
            .expect("buffer length matches dimensions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let grid = PixelGrid::from_flat(2, vec![10, 20, 30, 40]);
        assert_eq!(grid.get(0, 0), 10);
        assert_eq!(grid.get(1, 0), 20);
        assert_eq!(grid.get(0, 1), 30);
        assert_eq!(grid.get(1, 1), 40);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        let _ = PixelGrid::from_flat(2, vec![1, 2, 3]);
    }

    #[test]
    fn test_to_image_preserves_samples() {
        let grid = PixelGrid::from_flat(2, vec![1, 2, 3, 4]);
        let img = grid.to_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.as_raw().as_slice(), &[1, 2, 3, 4]);
    }
}
