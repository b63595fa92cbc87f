use std::collections::hash_map::{Entry, HashMap};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{dispatcher, Dispatch};

use crate::logger::{debug, error, info, instrument, warn};
use crate::inspection::{
    batch::naming::{artifact_file_name, output_basename, ArtifactKind},
    batch::types::{BatchReport, ImageOutcome, ImageSummary, InspectorConfig},
    codec::{ImageCodec, RasterReader, RasterWriter},
    common::error::{InspectionError, Result},
    defects::classify,
    filters::{erode, grayscale, mask, spread_dilate, threshold},
    raster::Raster,
};

/// Runs the inspection pipeline over batches of files.
///
/// The inspector holds no pool between runs; each [`Inspector::run`] builds
/// one sized by `worker_count` and drops it after every task has returned.
pub struct Inspector<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: InspectorConfig,
    /// Log sink for a run; `None` uses the calling thread's default at
    /// the moment `run` is invoked
    dispatch: Option<Dispatch>,
}

impl Inspector<ImageCodec, ImageCodec> {
    pub fn new(config: InspectorConfig) -> Result<Self> {
        Self::with_custom(ImageCodec, ImageCodec, config)
    }
}

impl<R: RasterReader, W: RasterWriter> Inspector<R, W> {
    pub fn with_custom(reader: R, writer: W, config: InspectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
            dispatch: None,
        })
    }

    /// Sends every event of a run, worker threads included, to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Inspects every file and blocks until all of them are done.
    ///
    /// Per-file failures are logged and reported in the returned
    /// [`BatchReport`]; only run-level problems (no input, unusable output
    /// directory, pool startup) surface as `Err`.
    pub fn run<S: AsRef<str> + Sync>(&self, filenames: &[S]) -> Result<BatchReport> {
        let dispatch = match &self.dispatch {
            Some(dispatch) => dispatch.clone(),
            None => dispatcher::get_default(|d| d.clone()),
        };
        dispatcher::with_default(&dispatch, || self.run_batch(filenames, &dispatch))
    }

    fn run_batch<S: AsRef<str> + Sync>(&self, filenames: &[S], dispatch: &Dispatch) -> Result<BatchReport> {
        if filenames.is_empty() {
            error!("No files were provided");
            return Err(InspectionError::NoInputFiles);
        }

        self.prepare_output_dir()?;
        let owners = self.claim_outputs(filenames);

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count)
            .thread_name(|i| format!("inspector-{}", i))
            .build()
            .inspect_err(|e| error!("Failed to start worker pool: {}", e))?;

        debug!(
            files = filenames.len(),
            workers = self.config.worker_count,
            "Submitting batch"
        );

        let outcomes: Vec<ImageOutcome> = pool.install(|| {
            filenames
                .par_iter()
                .zip(owners.par_iter())
                .with_max_len(1)
                .map(|(filename, owner)| {
                    let filename = filename.as_ref();
                    let result = match owner {
                        None => dispatcher::with_default(dispatch, || self.inspect_file(filename)),
                        Some(first) => Err(InspectionError::DuplicateOutputError {
                            filename: filename.to_string(),
                            first: first.clone(),
                        }),
                    };
                    ImageOutcome {
                        filename: filename.to_string(),
                        result,
                    }
                })
                .collect()
        });
        drop(pool);

        let report = BatchReport { outcomes };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            defects = report.total_defects(),
            "Batch finished"
        );
        Ok(report)
    }

    /// For each filename, `None` if it owns its artifact paths, or the
    /// earlier filename whose artifacts it would overwrite.
    fn claim_outputs<S: AsRef<str>>(&self, filenames: &[S]) -> Vec<Option<String>> {
        let mut claimed: HashMap<String, &str> = HashMap::new();

        filenames
            .iter()
            .map(|filename| {
                let filename = filename.as_ref();
                match claimed.entry(output_basename(filename).to_string()) {
                    Entry::Vacant(slot) => {
                        slot.insert(filename);
                        None
                    }
                    Entry::Occupied(slot) => {
                        error!(
                            "Skipping {}: its outputs collide with those of {}",
                            filename,
                            slot.get()
                        );
                        Some(slot.get().to_string())
                    }
                }
            })
            .collect()
    }

    fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;

        if dir.is_dir() {
            debug!("Found output directory {}", dir.display());
            return Ok(());
        }

        fs::create_dir_all(dir)
            .map_err(|source| InspectionError::DirectoryCreationError {
                path: dir.clone(),
                source,
            })
            .inspect_err(|e| error!("{}", e))?;

        info!("Created output directory {}", dir.display());
        Ok(())
    }

    /// Full pipeline for one file. Decode failures end the run for this file;
    /// write failures are recorded and the remaining stages still run.
    #[instrument(name = "inspect", skip(self))]
    pub fn inspect_file(&self, filename: &str) -> Result<ImageSummary> {
        debug!("Now processing {}", filename);

        let mut summary = ImageSummary::default();

        let input_path = self.config.input_dir.join(filename);
        let data = summary
            .timings
            .time("read_input", || fs::read(&input_path))
            .map_err(|e| InspectionError::DecodeError(format!("{}: {}", input_path.display(), e)))
            .inspect_err(|e| error!("Failed to read file {}: {}", filename, e))?;

        let input = summary
            .timings
            .time("decode", || self.reader.read_raster(&data))
            .inspect_err(|e| error!("Failed to decode file {}: {}", filename, e))?;

        if input.width() < 3 || input.height() < 3 {
            warn!(
                "{} is {}x{}; images without interior pixels cannot contain defects",
                filename,
                input.width(),
                input.height()
            );
        }

        let level = self.config.mask_threshold;
        let gray = summary.timings.time("grayscale", || grayscale(&input));

        let masked = if self.config.debug_mode {
            self.emit(&mut summary, filename, ArtifactKind::Grayscale, &gray);
            let binary = summary.timings.time("threshold", || threshold(&gray, level));
            self.emit(&mut summary, filename, ArtifactKind::Threshold, &binary);
            summary.timings.time("mask", || spread_dilate(&erode(&binary)))
        } else {
            summary.timings.time("mask", || mask(&gray, level))
        };
        self.emit(&mut summary, filename, ArtifactKind::Mask, &masked);

        let dilated = summary.timings.time("dilate", || spread_dilate(&masked));
        self.emit(&mut summary, filename, ArtifactKind::Dilated, &dilated);

        let range = self.config.area_range();
        let map = summary.timings.time("classify", || classify(&dilated, &range));
        self.emit(&mut summary, filename, ArtifactKind::Imperfection, &map.raster);

        info!(
            defects = map.defects.len(),
            rejected = map.rejected,
            total_area = map.total_area(),
            "Inspected {}",
            filename
        );
        summary.timings.log_summary();

        summary.defects = map.defects;
        summary.rejected = map.rejected;
        Ok(summary)
    }

    fn emit(&self, summary: &mut ImageSummary, filename: &str, kind: ArtifactKind, raster: &Raster) {
        let path = self.artifact_path(filename, kind);
        let step = format!("write_{}", kind.suffix());

        match summary.timings.time(&step, || self.write_artifact(&path, raster)) {
            Ok(()) => {
                info!("Wrote {} {} file successfully", filename, kind.suffix());
                summary.artifacts.push(path);
            }
            Err(e) => {
                error!("Failed to write {} file for {}: {}", kind.suffix(), filename, e);
                summary.failures.push(e);
            }
        }
    }

    pub fn artifact_path(&self, filename: &str, kind: ArtifactKind) -> PathBuf {
        self.config
            .output_dir
            .join(artifact_file_name(filename, kind, self.writer.extension()))
    }

    fn write_artifact(&self, path: &Path, raster: &Raster) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| InspectionError::EncodeError(format!("{}: {}", path.display(), e)))?;
        let mut output = BufWriter::new(file);

        self.writer.write_raster(raster, &mut output)?;
        output
            .flush()
            .map_err(|e| InspectionError::EncodeError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
