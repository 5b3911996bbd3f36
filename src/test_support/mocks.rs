//! Mock implementations for unit testing.
//!
//! These mocks implement the core traits from `crate::domain::traits` to
//! enable testing without Whisper models or audio files.

use crate::app::config::DecodeOptions;
use crate::domain::{Segment, SpeechEngine, TranscribeError, TranscriptionInfo};
use anyhow::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

type FailureFn = Box<dyn Fn(&Path) -> TranscribeError>;

/// Mock speech engine.
///
/// Returns predefined segment texts (one second each) and records every
/// request it receives.
pub struct MockSpeechEngine {
    texts: Vec<String>,
    failure: Option<FailureFn>,
    calls: RefCell<Vec<(PathBuf, DecodeOptions)>>,
}

impl MockSpeechEngine {
    /// Create a mock engine producing one segment per text.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Create a mock engine whose `transcribe` always fails.
    pub fn failing(failure: impl Fn(&Path) -> TranscribeError + 'static) -> Self {
        Self {
            texts: Vec::new(),
            failure: Some(Box::new(failure)),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<(PathBuf, DecodeOptions)> {
        self.calls.borrow().clone()
    }
}

impl SpeechEngine for MockSpeechEngine {
    type Segments = std::vec::IntoIter<Result<Segment>>;

    fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<(Self::Segments, TranscriptionInfo)> {
        self.calls
            .borrow_mut()
            .push((audio_path.to_path_buf(), options.clone()));

        if let Some(failure) = &self.failure {
            return Err(failure(audio_path).into());
        }

        let segments: Vec<Result<Segment>> = self
            .texts
            .iter()
            .enumerate()
            .map(|(i, text)| Ok(Segment::new(i as f64, (i + 1) as f64, text.clone())))
            .collect();

        let info = TranscriptionInfo {
            language: options.language.clone().unwrap_or_else(|| "en".to_string()),
            duration_secs: self.texts.len() as f64,
            model_path: PathBuf::from("mock.bin"),
            num_segments: segments.len(),
        };

        Ok((segments.into_iter(), info))
    }
}
