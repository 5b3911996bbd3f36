use crate::app::config::{DecodeOptions, Device, EngineConfig};
use crate::domain::{Segment, SpeechEngine, TranscribeError, TranscriptionInfo};
use crate::infrastructure::models::resolve_model_path;
use crate::transcription::wav_reader::{prepare_for_whisper, read_wav};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

/// whisper.cpp reports timestamps in 10 ms ticks.
const TICKS_PER_SEC: f64 = 100.0;

/// Loaded Whisper model.
pub struct WhisperEngine {
    ctx: WhisperContext,
    model_path: PathBuf,
}

impl WhisperEngine {
    /// Resolve the weights for `config` and load them.
    pub fn load(config: &EngineConfig) -> Result<Self> {
        if !config.device.is_supported() {
            return Err(TranscribeError::UnsupportedDevice(config.device).into());
        }

        let model_path = resolve_model_path(config)?;
        Self::from_file(&model_path, config.device)
    }

    /// Load a ggml weights file directly.
    pub fn from_file(model_path: &Path, device: Device) -> Result<Self> {
        if !device.is_supported() {
            return Err(TranscribeError::UnsupportedDevice(device).into());
        }

        info!(model = %model_path.display(), %device, "loading whisper model");

        let mut params = WhisperContextParameters::default();
        params.use_gpu(device == Device::Gpu);

        let path_str = model_path.to_string_lossy();
        let ctx = WhisperContext::new_with_params(&path_str, params).map_err(|e| {
            TranscribeError::ModelLoad {
                path: model_path.to_path_buf(),
                source: e.into(),
            }
        })?;

        Ok(Self {
            ctx,
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SpeechEngine for WhisperEngine {
    type Segments = WhisperSegments;

    fn transcribe(
        &self,
        audio_path: &Path,
        options: &DecodeOptions,
    ) -> Result<(WhisperSegments, TranscriptionInfo)> {
        options.validate()?;

        let audio = read_wav(audio_path)?;
        debug!(
            channels = audio.channels,
            sample_rate = audio.sample_rate,
            duration_secs = audio.duration_secs,
            "decoded audio"
        );
        let samples = prepare_for_whisper(&audio, audio_path)?;

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| TranscribeError::inference(audio_path, e))?;

        let count = if samples.is_empty() {
            debug!("no audio samples, skipping inference");
            0
        } else {
            let mut params = FullParams::new(SamplingStrategy::BeamSearch {
                beam_size: options.beam_size as i32,
                patience: -1.0,
            });
            params.set_language(Some(options.language.as_deref().unwrap_or("auto")));
            params.set_print_special(false);
            params.set_print_progress(false);
            params.set_print_realtime(false);
            params.set_print_timestamps(false);
            params.set_translate(false);

            info!(beam_size = options.beam_size, "transcribing {}", audio_path.display());
            state
                .full(params, &samples)
                .map_err(|e| TranscribeError::inference(audio_path, e))?;
            state
                .full_n_segments()
                .map_err(|e| TranscribeError::inference(audio_path, e))?
        };

        let info = TranscriptionInfo {
            language: options.language.clone().unwrap_or_else(|| "auto".to_string()),
            duration_secs: audio.duration_secs,
            model_path: self.model_path.clone(),
            num_segments: count.max(0) as usize,
        };

        let segments = WhisperSegments {
            state,
            audio_path: audio_path.to_path_buf(),
            next: 0,
            count,
        };

        Ok((segments, info))
    }
}

/// Segments of a finished whisper.cpp run, read out one at a time.
pub struct WhisperSegments {
    state: WhisperState,
    audio_path: PathBuf,
    next: i32,
    count: i32,
}

impl WhisperSegments {
    fn read(&self, index: i32) -> Result<Segment> {
        let text = self
            .state
            .full_get_segment_text(index)
            .map_err(|e| TranscribeError::inference(&self.audio_path, e))?;
        let t0 = self
            .state
            .full_get_segment_t0(index)
            .map_err(|e| TranscribeError::inference(&self.audio_path, e))?;
        let t1 = self
            .state
            .full_get_segment_t1(index)
            .map_err(|e| TranscribeError::inference(&self.audio_path, e))?;

        Ok(Segment::new(
            t0 as f64 / TICKS_PER_SEC,
            t1 as f64 / TICKS_PER_SEC,
            text,
        ))
    }
}

impl Iterator for WhisperSegments {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.read(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next).max(0) as usize;
        (remaining, Some(remaining))
    }
}
