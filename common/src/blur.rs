//! Reference Gaussian blur for comparison against the hardware result.

use crate::PixelGrid;

// 3x3 Gaussian approximation, weights sum to 16
const KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];
const KERNEL_SUM: u32 = 16;

/// Apply the fixed 3x3 kernel with symmetric boundary extension.
///
/// Accumulates in integer arithmetic and truncates on the divide, which
/// reproduces a float convolve-then-truncate of the same kernel exactly:
/// the weighted sum never exceeds 4080, so `sum / 16.0` is a dyadic value
/// representable without rounding.
pub fn gaussian3(src: &PixelGrid) -> PixelGrid {
    let n = src.side() as isize;
    let mut out = Vec::with_capacity(src.as_bytes().len());

    for y in 0..n {
        for x in 0..n {
            let mut acc = 0u32;
            for (ky, row) in KERNEL.iter().enumerate() {
                for (kx, weight) in row.iter().enumerate() {
                    let sy = reflect(y + ky as isize - 1, n);
                    let sx = reflect(x + kx as isize - 1, n);
                    acc += weight * u32::from(src.get(sx, sy));
                }
            }
            out.push((acc / KERNEL_SUM) as u8);
        }
    }

    PixelGrid::from_flat(src.side(), out)
}

// symmetric extension: -1 -> 0, n -> n - 1
fn reflect(i: isize, n: isize) -> usize {
    if i < 0 {
        (-i - 1) as usize
    } else if i >= n {
        (2 * n - i - 1) as usize
    } else {
        i as usize
    }
}
