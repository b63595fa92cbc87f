//! Defect extraction
//!
//! Connected-component labelling of binary rasters and size-based
//! classification of the resulting bounding boxes.

pub mod labeler;
pub mod classifier;

pub use labeler::flood_fill;
pub use classifier::{classify, classify_into, paint_box, AreaRange, ClassifyOutcome, ImperfectionMap};
