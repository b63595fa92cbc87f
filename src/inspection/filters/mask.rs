use crate::inspection::filters::morphology::{erode, spread_dilate};
use crate::inspection::raster::{Raster, BACKGROUND, FOREGROUND};

/// Binarizes a grayscale raster. Luminance above `level` is background;
/// everything at or below it is foreground.
pub fn threshold(gray: &Raster, level: u8) -> Raster {
    let mut output = Raster::new(gray.width(), gray.height());

    for y in 0..gray.height() {
        for x in 0..gray.width() {
            let value = if gray.blue(x, y) > level { BACKGROUND } else { FOREGROUND };
            output.set(x, y, value);
        }
    }

    output
}

/// Threshold, then kernel erosion, then spread dilation.
pub fn mask(gray: &Raster, level: u8) -> Raster {
    spread_dilate(&erode(&threshold(gray, level)))
}
