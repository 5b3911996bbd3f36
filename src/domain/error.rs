//! Classified transcription failures.
//!
//! Every failure is fatal to a run. The variants exist so callers (and tests)
//! can tell a model that never loaded apart from audio that never decoded;
//! nothing in the crate recovers from them.

use crate::app::config::Device;
use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Origin of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The engine could not be initialised.
    ModelLoad,
    /// The audio could not be read or recognised.
    Decode,
}

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("invalid model name: {0:?}")]
    InvalidModelName(String),

    #[error("model '{model}' not found (looked for {filename} in: {tried}); download it from {url}")]
    ModelNotFound {
        model: String,
        filename: String,
        tried: String,
        url: String,
    },

    #[error("device {0} is not supported by this build (rebuild with --features gpu)")]
    UnsupportedDevice(Device),

    #[error("failed to load model {}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("beam size must be positive, got {0}")]
    InvalidBeamSize(u32),

    #[error("failed to decode audio {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("inference failed on {}", .path.display())]
    Inference {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl TranscribeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidModelName(_)
            | Self::ModelNotFound { .. }
            | Self::UnsupportedDevice(_)
            | Self::ModelLoad { .. } => ErrorKind::ModelLoad,
            Self::InvalidBeamSize(_) | Self::Decode { .. } | Self::Inference { .. } => {
                ErrorKind::Decode
            }
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn inference(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::Inference {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Classify an `anyhow` error produced anywhere in the crate.
///
/// Returns `None` for errors that did not originate from a classified failure.
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<TranscribeError>())
        .map(TranscribeError::kind)
}
