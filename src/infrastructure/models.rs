use crate::app::config::{model_search_dirs, ComputeType, EngineConfig};
use crate::domain::TranscribeError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

const HUGGINGFACE_BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/";

/// Validates that a model identifier is safe (no path traversal).
///
/// Rejects identifiers containing path separators or `..` sequences.
fn sanitize_model_name(model: &str) -> Result<()> {
    if model.is_empty()
        || model.contains('/')
        || model.contains('\\')
        || model.contains("..")
        || model.contains('\0')
    {
        return Err(TranscribeError::InvalidModelName(model.to_string()).into());
    }
    Ok(())
}

/// ggml weights file name for a model at a given precision.
///
/// `("base.en", Int8)` becomes `ggml-base.en-q8_0.bin`.
pub fn model_filename(model: &str, compute_type: ComputeType) -> String {
    match compute_type.ggml_suffix() {
        Some(suffix) => format!("ggml-{}-{}.bin", model, suffix),
        None => format!("ggml-{}.bin", model),
    }
}

/// Where the weights file can be downloaded by hand.
pub fn download_url(filename: &str) -> String {
    format!("{}{}", HUGGINGFACE_BASE_URL, filename)
}

/// Resolve the weights file for `config`, searching the default directories.
pub fn resolve_model_path(config: &EngineConfig) -> Result<PathBuf> {
    resolve_model_path_in(config, &model_search_dirs())
}

/// Resolve the weights file for `config` within `search_dirs`.
///
/// A `config.model` naming an existing file is used as-is.
pub fn resolve_model_path_in(config: &EngineConfig, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    let direct = Path::new(&config.model);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    sanitize_model_name(&config.model)?;

    let filename = model_filename(&config.model, config.compute_type);
    let candidates: Vec<PathBuf> = search_dirs.iter().map(|dir| dir.join(&filename)).collect();

    for candidate in &candidates {
        debug!(path = %candidate.display(), "looking for model");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    let tried = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Err(TranscribeError::ModelNotFound {
        model: config.model.clone(),
        url: download_url(&filename),
        filename,
        tried,
    }
    .into())
}
