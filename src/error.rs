// Crate-level error type
// Aggregates the per-stage errors surfaced by the pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::audio::DecodeError;
use crate::config::ConfigError;

/// Errors that can abort a beatmap generation run
#[derive(Debug, Error)]
pub enum BeatmapError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to write beatmap to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize beatmap to {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type BeatmapResult<T> = Result<T, BeatmapError>;
