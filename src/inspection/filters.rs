//! Pixel filters
//!
//! Grayscale reduction, thresholding and the two morphological operators.

pub mod grayscale;
pub mod mask;
pub mod morphology;

pub use grayscale::grayscale;
pub use mask::{threshold, mask};
pub use morphology::{Kernel, MorphOp, CROSS_KERNEL, morph_kernel, erode, dilate, spread_dilate};
