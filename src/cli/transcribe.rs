//! CLI transcription command implementation.

use crate::app::config::EngineConfig;
use crate::cli::args::Cli;
use crate::domain::SpeechEngine;
use crate::transcription::{TranscriptionService, WhisperEngine};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Run one transcription and print the transcript to stdout.
pub fn run(args: Cli) -> Result<()> {
    // 1. Load the model with the built-in configuration
    let config = EngineConfig::default();
    let engine = WhisperEngine::load(&config)?;
    let service = TranscriptionService::new(engine, config.decode_options());

    // 2. Transcribe and print
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    transcribe_to(&service, &args.input, &mut handle)
}

/// Transcribe `input` and write the transcript, newline terminated, to `out`.
///
/// Nothing is written unless the whole transcription succeeds.
pub fn transcribe_to<E, W>(service: &TranscriptionService<E>, input: &Path, out: &mut W) -> Result<()>
where
    E: SpeechEngine,
    W: Write,
{
    let (transcript, info) = service.transcribe(input)?;
    debug!(
        language = %info.language,
        duration_secs = info.duration_secs,
        segments = info.num_segments,
        model = %info.model_path.display(),
        "transcription finished"
    );

    writeln!(out, "{}", transcript)?;
    out.flush()?;
    Ok(())
}
