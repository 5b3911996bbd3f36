//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Transcryb - offline one-shot speech-to-text
#[derive(Parser, Debug)]
#[command(name = "transcryb")]
#[command(about = "Transcribe an audio file to text using Whisper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the audio file (WAV) to transcribe
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_path() {
        let cli = Cli::try_parse_from(["transcryb", "speech.wav"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("speech.wav"));
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        let err = Cli::try_parse_from(["transcryb"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Cli::try_parse_from(["transcryb", "a.wav", "b.wav"]).is_err());
        assert!(Cli::try_parse_from(["transcryb", "--beam", "3", "a.wav"]).is_err());
    }
}
