use crate::inspection::common::error::Result;
use crate::inspection::raster::Raster;

pub trait RasterReader: Send + Sync {
    fn read_raster(&self, data: &[u8]) -> Result<Raster>;
}
