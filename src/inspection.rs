//! Imperfection inspection pipeline
//!
//! Pixel stages (grayscale, masking, morphology, labelling, classification)
//! live in their own modules and operate on [`Raster`]. The [`Inspector`]
//! ties them to a codec and runs a batch of files over a worker pool.

pub mod common;
pub mod raster;
pub mod filters;
pub mod defects;
pub mod codec;
pub mod batch;

pub use common::{
    InspectionError,
    Result,
    PipelineTimings,
};

pub use raster::{
    Raster,
    VisitedGrid,
    BoundingBox,
    FOREGROUND,
    BACKGROUND,
    MARKER,
};

pub use filters::{
    grayscale,
    threshold,
    mask,
    erode,
    dilate,
    spread_dilate,
};

pub use defects::{
    flood_fill,
    classify,
    classify_into,
    AreaRange,
    ClassifyOutcome,
    ImperfectionMap,
};

pub use codec::{
    RasterReader,
    RasterWriter,
    ImageCodec,
};

pub use batch::{
    InspectorConfig,
    InspectorConfigBuilder,
    Inspector,
    BatchReport,
    ImageOutcome,
    ImageSummary,
    ArtifactKind,
};
