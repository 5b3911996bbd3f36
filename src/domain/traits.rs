//! Core domain traits for dependency inversion.
//!
//! The inference engine is an opaque collaborator. This trait is the whole
//! surface the transcriber relies on, which keeps the assembly logic testable
//! with a scripted engine instead of a Whisper model.

use crate::app::config::DecodeOptions;
use crate::domain::types::{Segment, TranscriptionInfo};
use anyhow::Result;
use std::path::Path;

/// Speech-to-text engine abstraction.
///
/// Implementors are loaded once (construction is implementor specific) and
/// then asked to transcribe a file.
pub trait SpeechEngine {
    /// Lazy, finite, single-pass sequence of recognized segments.
    ///
    /// An `Err` item means recognition failed partway; consumers must treat
    /// the whole run as failed.
    type Segments: Iterator<Item = Result<Segment>>;

    /// Transcribe the audio file at `audio_path`.
    ///
    /// # Arguments
    /// * `audio_path` - Audio file; format support is engine specific
    /// * `options` - Decoding parameters (beam width, language)
    fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<(Self::Segments, TranscriptionInfo)>;
}
