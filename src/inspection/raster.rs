//! In-memory pixel buffers
//!
//! This module provides the packed ARGB raster every stage reads and writes,
//! plus the bookkeeping types used by component labelling.

pub mod types;

pub use types::{Raster, VisitedGrid, BoundingBox, FOREGROUND, BACKGROUND, MARKER};
