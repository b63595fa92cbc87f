use crate::inspection::raster::Raster;

/// Replaces R, G and B with their unweighted integer mean. Alpha is kept.
pub fn grayscale(input: &Raster) -> Raster {
    let mut output = Raster::new(input.width(), input.height()).with_alpha(input.has_alpha());

    for y in 0..input.height() {
        for x in 0..input.width() {
            let p = input.get(x, y);
            let a = (p >> 24) & 0xFF;
            let r = (p >> 16) & 0xFF;
            let g = (p >> 8) & 0xFF;
            let b = p & 0xFF;
            let avg = (r + g + b) / 3;

            output.set(x, y, (a << 24) | (avg << 16) | (avg << 8) | avg);
        }
    }

    output
}
