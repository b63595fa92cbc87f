use std::io::Write;

use crate::inspection::common::error::Result;
use crate::inspection::raster::Raster;

pub trait RasterWriter: Send + Sync {
    /// File extension of the encoded format, without the dot.
    fn extension(&self) -> &str;

    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()>;
}
