//! Values exchanged across the engine boundary.

use std::fmt;
use std::path::PathBuf;

/// One recognized span of speech.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start offset in seconds
    pub start_secs: f64,
    /// End offset in seconds
    pub end_secs: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start_secs: f64, end_secs: f64, text: impl Into<String>) -> Self {
        Self {
            start_secs,
            end_secs,
            text: text.into(),
        }
    }
}

/// Auxiliary record returned alongside the segments of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionInfo {
    /// Language code used for decoding, "auto" when detected by the engine
    pub language: String,
    /// Duration of the decoded audio
    pub duration_secs: f64,
    /// Model file the engine was loaded from
    pub model_path: PathBuf,
    pub num_segments: usize,
}

/// Final text of a run: fragments joined by single spaces, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Build a transcript from fragments in engine order.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<S> = fragments.into_iter().collect();
        let joined = fragments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        Self(joined.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
