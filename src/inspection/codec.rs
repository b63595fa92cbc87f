//! Raster encoding and decoding
//!
//! The pipeline only talks to [`RasterReader`] and [`RasterWriter`];
//! [`ImageCodec`] backs both with the `image` crate.

mod reader;
mod writer;
mod image_codec;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use image_codec::ImageCodec;
