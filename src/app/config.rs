use crate::domain::TranscribeError;
use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Execution device for inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Cpu,
    /// Accelerator (requires the `gpu` feature)
    Gpu,
}

impl Device {
    /// Whether this build can run on the device.
    pub fn is_supported(self) -> bool {
        match self {
            Device::Cpu => true,
            Device::Gpu => cfg!(feature = "gpu"),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Gpu => f.write_str("gpu"),
        }
    }
}

/// Numeric precision of the model weights.
///
/// whisper.cpp bakes quantization into the weights file, so each variant
/// selects a different ggml file for the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeType {
    Float16,
    #[default]
    Int8,
    Int5,
}

impl ComputeType {
    /// ggml quantization suffix, `None` for unquantized weights.
    pub fn ggml_suffix(self) -> Option<&'static str> {
        match self {
            ComputeType::Float16 => None,
            ComputeType::Int8 => Some("q8_0"),
            ComputeType::Int5 => Some("q5_1"),
        }
    }
}

/// Engine construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Model identifier ("base.en", "small", ...) or a path to a ggml file
    pub model: String,
    pub device: Device,
    pub compute_type: ComputeType,
}

fn default_model() -> String {
    "base.en".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            device: Device::default(),
            compute_type: ComputeType::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    pub fn with_compute_type(mut self, compute_type: ComputeType) -> Self {
        self.compute_type = compute_type;
        self
    }

    /// English-only Whisper models carry a `.en` suffix.
    pub fn is_english_only(&self) -> bool {
        self.model.ends_with(".en")
    }

    /// Decoding options matching this model.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            language: self.is_english_only().then(|| "en".to_string()),
            ..DecodeOptions::default()
        }
    }
}

/// Per-request decoding parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Number of hypotheses kept by beam search
    pub beam_size: u32,
    /// Language code, `None` to auto-detect
    pub language: Option<String>,
}

fn default_beam_size() -> u32 {
    5
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            beam_size: default_beam_size(),
            language: None,
        }
    }
}

impl DecodeOptions {
    pub fn with_beam_size(mut self, beam_size: u32) -> Self {
        self.beam_size = beam_size;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.beam_size == 0 {
            return Err(TranscribeError::InvalidBeamSize(self.beam_size).into());
        }
        Ok(())
    }
}

/// Application model directory.
pub fn models_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transcryb")
        .join("models")
}

/// Directories searched for ggml model files, in priority order.
pub fn model_search_dirs() -> Vec<PathBuf> {
    let mut search = vec![models_dir()];
    if let Some(data) = dirs::data_local_dir() {
        search.push(data.join("whisper"));
    }
    search.extend([
        PathBuf::from("models"),
        PathBuf::from("."),
        PathBuf::from("/usr/local/share/whisper"),
        PathBuf::from("/usr/share/whisper"),
    ]);
    search
}
