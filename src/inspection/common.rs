//! Common utilities module
//!
//! This module contains the error type and timing helpers shared across the pipeline.

pub mod error;
pub mod timing;

pub use error::{InspectionError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
