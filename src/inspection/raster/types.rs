//! Raster data types

/// Binary foreground (candidate defect) value.
pub const FOREGROUND: u32 = 0x000000;
/// Binary background value.
pub const BACKGROUND: u32 = 0xFFFFFF;
/// Colour painted over accepted defects.
pub const MARKER: u32 = 0xFF0000;

/// A width x height grid of packed `0xAARRGGBB` pixels.
///
/// Coordinates outside the grid are a programming error and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    /// Whether the alpha byte carries meaning and should be encoded
    has_alpha: bool,
}

impl Raster {
    /// Creates an opaque raster with every pixel zeroed (black).
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: u32, height: u32, value: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
            has_alpha: false,
        }
    }

    /// Builds a raster from `0xAARRGGBB` pixels laid out row by row.
    ///
    /// Returns `None` when the pixel count does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>, has_alpha: bool) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, pixels, has_alpha })
    }

    /// Packs interleaved RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| {
                (px[3] as u32) << 24 | (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32
            })
            .collect();
        Some(Self { width, height, pixels, has_alpha: true })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn with_alpha(mut self, has_alpha: bool) -> Self {
        self.has_alpha = has_alpha;
        self
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} raster",
            x, y, self.width, self.height
        );
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        let i = self.index(x, y);
        self.pixels[i] = value;
    }

    /// Blue channel, which binary stages use to classify a pixel.
    #[inline]
    pub fn blue(&self, x: u32, y: u32) -> u8 {
        (self.get(x, y) & 0xFF) as u8
    }

    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.blue(x, y) == 0
    }

    /// Unpacks into interleaved RGBA8. Opaque rasters report alpha 255.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            let alpha = if self.has_alpha { (p >> 24) as u8 } else { u8::MAX };
            bytes.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8, alpha]);
        }
        bytes
    }

    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &p in &self.pixels {
            bytes.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8]);
        }
        bytes
    }
}

/// Tracks which pixels a labelling pass has already claimed.
#[derive(Debug, Clone)]
pub struct VisitedGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl VisitedGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// A grid of the same dimensions as `raster`.
    pub fn for_raster(raster: &Raster) -> Self {
        Self::new(raster.width(), raster.height())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "cell ({}, {}) out of bounds", x, y);
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn is_visited(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn mark(&mut self, x: u32, y: u32) {
        let i = self.index(x, y);
        self.cells[i] = true;
    }

    pub fn mark_all(&mut self) {
        self.cells.fill(true);
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

/// Inclusive pixel extent of a connected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn at(x: u32, y: u32) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// `max_x - min_x`, so a single pixel has width 0.
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Size proxy used for classification. Not a pixel count.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}
