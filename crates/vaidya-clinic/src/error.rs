//! Error types for the clinic crate.

use std::path::PathBuf;

use thiserror::Error;
use vaidya_view::ViewError;

/// Errors raised while loading data, building views or writing output.
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset: {0}")]
    Dataset(#[source] serde_json::Error),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("unknown {kind} '{value}'. Expected one of: {expected}")]
    UnknownChoice {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClinicError>;
