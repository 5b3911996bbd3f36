pub mod error;
pub mod traits;
pub mod types;

pub use error::{error_kind, ErrorKind, TranscribeError};
pub use traits::SpeechEngine;
pub use types::{Segment, Transcript, TranscriptionInfo};
