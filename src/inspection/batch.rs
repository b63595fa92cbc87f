//! Batch orchestration module
//!
//! Runs the full per-image pipeline for a list of files over a worker pool
//! and collects one outcome per file.

mod types;
mod naming;
mod inspector;


pub use types::{InspectorConfig, InspectorConfigBuilder, BatchReport, ImageOutcome, ImageSummary};
pub use naming::{ArtifactKind, output_basename, artifact_file_name};
pub use inspector::Inspector;
