use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectionError {
    #[error("Failed to decode input image: {0}")]
    DecodeError(String),

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreationError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Outputs of {filename} would overwrite those of {first}")]
    DuplicateOutputError { filename: String, first: String },

    #[error("No files were provided")]
    NoInputFiles,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPoolError(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectionError>;
