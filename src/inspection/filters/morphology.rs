//! Morphological operators over binary rasters
//!
//! Two unrelated operators live here. [`morph_kernel`] reduces a 3x3
//! neighbourhood selected by a [`Kernel`] to its minimum or maximum and
//! re-binarizes the result. [`spread_dilate`] grows every interior
//! foreground pixel into its full 8-connected ring and is what the masking
//! stage actually uses for growth.

use crate::inspection::raster::{Raster, BACKGROUND, FOREGROUND};

/// 3x3 structuring element, indexed `[row][column]`, centred on `[1][1]`.
pub type Kernel = [[bool; 3]; 3];

pub const CROSS_KERNEL: Kernel = [
    [false, true, false],
    [true, true, true],
    [false, true, false],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Minimum over the kernel
    Erode,
    /// Maximum over the kernel
    Dilate,
}

/// Applies `op` over every interior pixel. Output is white only where the
/// extremum is 255; the 1-pixel border keeps the zero default.
pub fn morph_kernel(input: &Raster, kernel: &Kernel, op: MorphOp) -> Raster {
    let width = input.width();
    let height = input.height();
    let mut output = Raster::new(width, height);

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut extremum = match op {
                MorphOp::Erode => u8::MAX,
                MorphOp::Dilate => u8::MIN,
            };

            for (ky, row) in kernel.iter().enumerate() {
                for (kx, &on) in row.iter().enumerate() {
                    if !on {
                        continue;
                    }
                    let px = input.blue(x + kx as u32 - 1, y + ky as u32 - 1);
                    extremum = match op {
                        MorphOp::Erode => extremum.min(px),
                        MorphOp::Dilate => extremum.max(px),
                    };
                }
            }

            output.set(x, y, if extremum == u8::MAX { BACKGROUND } else { FOREGROUND });
        }
    }

    output
}

/// Minimum filter over the cross kernel. On a binary raster this grows the
/// dark (foreground) regions by one cardinal step.
pub fn erode(input: &Raster) -> Raster {
    morph_kernel(input, &CROSS_KERNEL, MorphOp::Erode)
}

/// Maximum filter over the cross kernel. Not part of the default pipeline.
pub fn dilate(input: &Raster) -> Raster {
    morph_kernel(input, &CROSS_KERNEL, MorphOp::Dilate)
}

const RING: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Paints the 3x3 neighbourhood of every interior foreground pixel as
/// foreground in a fresh background raster.
pub fn spread_dilate(input: &Raster) -> Raster {
    let width = input.width();
    let height = input.height();
    let mut output = Raster::filled(width, height, BACKGROUND);

    for x in 1..width.saturating_sub(1) {
        for y in 1..height.saturating_sub(1) {
            if !input.is_foreground(x, y) {
                continue;
            }

            output.set(x, y, FOREGROUND);
            for (dx, dy) in RING {
                output.set(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy), FOREGROUND);
            }
        }
    }

    output
}
