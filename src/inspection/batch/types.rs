//! Inspector configuration and report types

use std::path::PathBuf;

use crate::inspection::common::error::{InspectionError, Result};
use crate::inspection::common::timing::PipelineTimings;
use crate::inspection::defects::AreaRange;
use crate::inspection::raster::BoundingBox;

/// Settings for one inspection run
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Number of worker threads; each processes whole images
    pub worker_count: usize,
    /// Smallest accepted bounding-box area (inclusive)
    pub min_imperfection_area: u64,
    /// Largest accepted bounding-box area (inclusive)
    pub max_imperfection_area: u64,
    /// Luminance at or below which a pixel is foreground
    pub mask_threshold: u8,
    /// Write intermediate artifacts and enable debug logging
    pub debug_mode: bool,
    /// Directory input filenames are resolved against
    pub input_dir: PathBuf,
    /// Directory artifacts are written to, created on demand
    pub output_dir: PathBuf,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            worker_count: 4,
            min_imperfection_area: 50,
            max_imperfection_area: 100,
            mask_threshold: 100,
            debug_mode: false,
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl InspectorConfig {
    pub fn builder() -> InspectorConfigBuilder {
        InspectorConfigBuilder::default()
    }

    pub fn area_range(&self) -> AreaRange {
        AreaRange::new(self.min_imperfection_area, self.max_imperfection_area)
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(InspectionError::InvalidConfig(
                "worker_count must be greater than zero".to_string(),
            ));
        }

        if self.min_imperfection_area > self.max_imperfection_area {
            return Err(InspectionError::InvalidConfig(format!(
                "min_imperfection_area ({}) exceeds max_imperfection_area ({})",
                self.min_imperfection_area, self.max_imperfection_area
            )));
        }

        Ok(())
    }
}

/// Builder for InspectorConfig
#[derive(Default)]
pub struct InspectorConfigBuilder {
    worker_count: Option<usize>,
    min_imperfection_area: Option<u64>,
    max_imperfection_area: Option<u64>,
    mask_threshold: Option<u8>,
    debug_mode: Option<bool>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl InspectorConfigBuilder {
    pub fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = Some(count);
        self
    }

    pub fn min_imperfection_area(mut self, area: u64) -> Self {
        self.min_imperfection_area = Some(area);
        self
    }

    pub fn max_imperfection_area(mut self, area: u64) -> Self {
        self.max_imperfection_area = Some(area);
        self
    }

    pub fn mask_threshold(mut self, threshold: u8) -> Self {
        self.mask_threshold = Some(threshold);
        self
    }

    pub fn debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = Some(enable);
        self
    }

    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> InspectorConfig {
        let default = InspectorConfig::default();
        InspectorConfig {
            worker_count: self.worker_count.unwrap_or(default.worker_count),
            min_imperfection_area: self.min_imperfection_area.unwrap_or(default.min_imperfection_area),
            max_imperfection_area: self.max_imperfection_area.unwrap_or(default.max_imperfection_area),
            mask_threshold: self.mask_threshold.unwrap_or(default.mask_threshold),
            debug_mode: self.debug_mode.unwrap_or(default.debug_mode),
            input_dir: self.input_dir.unwrap_or(default.input_dir),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
        }
    }
}

/// What a successfully decoded image produced
#[derive(Debug, Default)]
pub struct ImageSummary {
    /// Artifacts written, in pipeline order
    pub artifacts: Vec<PathBuf>,
    /// Accepted defect boxes
    pub defects: Vec<BoundingBox>,
    /// Components outside the area range
    pub rejected: usize,
    /// Artifacts that could not be written
    pub failures: Vec<InspectionError>,
    pub timings: PipelineTimings,
}

impl ImageSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct ImageOutcome {
    pub filename: String,
    pub result: Result<ImageSummary>,
}

/// Per-file outcomes of a run, in submission order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ImageOutcome>,
}

impl BatchReport {
    /// Files that decoded and wrote every artifact.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(summary) if summary.is_complete()))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn total_defects(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|summary| summary.defects.len())
            .sum()
    }

    pub fn outcome(&self, filename: &str) -> Option<&ImageOutcome> {
        self.outcomes.iter().find(|o| o.filename == filename)
    }
}
