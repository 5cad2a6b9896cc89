use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Config directory not found at {0}. Run 'sitequote init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Estimate file not found: {0}")]
    EstimateFileNotFound(PathBuf),

    #[error("Failed to parse estimate file {path}: {source}")]
    EstimateParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Failed to serialize export document: {0}")]
    ExportSerialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
