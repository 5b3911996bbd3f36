//! Transcription service layer.
//!
//! Drives a `SpeechEngine` for one file and reduces its segments to the
//! final transcript.

use crate::app::config::DecodeOptions;
use crate::domain::{Segment, SpeechEngine, Transcript, TranscriptionInfo};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Consume a segment sequence in order and join the text fragments.
///
/// The first failing segment aborts the whole reduction, so a partial
/// transcript is never produced.
pub fn collect_transcript<I>(segments: I) -> Result<Transcript>
where
    I: IntoIterator<Item = Result<Segment>>,
{
    let fragments = segments
        .into_iter()
        .map(|segment| {
            let segment = segment?;
            debug!(
                start = segment.start_secs,
                end = segment.end_secs,
                text = %segment.text,
                "segment"
            );
            Ok(segment.text)
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(Transcript::from_fragments(fragments))
}

/// One engine plus the decoding options it is driven with.
pub struct TranscriptionService<E> {
    engine: E,
    options: DecodeOptions,
}

impl<E: SpeechEngine> TranscriptionService<E> {
    pub fn new(engine: E, options: DecodeOptions) -> Self {
        Self { engine, options }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Transcribe `audio_path` to a single transcript.
    pub fn transcribe(&self, audio_path: &Path) -> Result<(Transcript, TranscriptionInfo)> {
        let (segments, info) = self.engine.transcribe(audio_path, &self.options)?;
        let transcript = collect_transcript(segments)?;
        Ok((transcript, info))
    }
}
