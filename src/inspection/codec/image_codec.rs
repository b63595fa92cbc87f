//! Codec backed by the `image` crate.
//!
//! Decoding accepts whatever formats the crate was built with (PNG and JPEG
//! here) and always yields RGBA. Encoding is lossless PNG.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::inspection::codec::reader::RasterReader;
use crate::inspection::codec::writer::RasterWriter;
use crate::inspection::common::error::{InspectionError, Result};
use crate::inspection::raster::Raster;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl RasterReader for ImageCodec {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| InspectionError::DecodeError(e.to_string()))?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        debug!("Decoded image: {}x{}", width, height);

        Raster::from_rgba8(width, height, decoded.as_raw()).ok_or_else(|| {
            InspectionError::DecodeError(format!("buffer does not match {}x{}", width, height))
        })
    }
}

impl RasterWriter for ImageCodec {
    fn extension(&self) -> &str {
        "png"
    }

    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", raster.width(), raster.height());

        let (bytes, color) = if raster.has_alpha() {
            (raster.to_rgba8(), ExtendedColorType::Rgba8)
        } else {
            (raster.to_rgb8(), ExtendedColorType::Rgb8)
        };

        PngEncoder::new(output)
            .write_image(&bytes, raster.width(), raster.height(), color)
            .map_err(|e| InspectionError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
