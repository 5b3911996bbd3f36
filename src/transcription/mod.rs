pub mod service;
pub mod wav_reader;
pub mod whisper;

pub use service::{collect_transcript, TranscriptionService};
pub use whisper::{WhisperEngine, WhisperSegments};
