//! WAV file reading and audio preparation utilities.

use crate::domain::TranscribeError;
use anyhow::{Context, Result};
use rubato::{FftFixedIn, Resampler};
use std::path::Path;

/// Sample rate Whisper models are trained on.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Audio data read from a WAV file.
#[derive(Debug)]
pub struct WavAudio {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1=mono, 2=stereo)
    pub channels: u16,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Interleaved samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
}

/// Read a WAV file and convert to f32 samples.
///
/// Supports 8/16/24/32-bit integer and 32-bit float formats.
pub fn read_wav(path: &Path) -> Result<WavAudio> {
    let reader = hound::WavReader::open(path).map_err(|e| TranscribeError::decode(path, e))?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels;

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_value))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TranscribeError::decode(path, e))?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TranscribeError::decode(path, e))?,
    };

    let total_frames = samples.len() / channels as usize;
    let duration_secs = total_frames as f64 / sample_rate as f64;

    Ok(WavAudio {
        sample_rate,
        channels,
        duration_secs,
        samples,
    })
}

/// Average interleaved channels down to mono.
fn to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels == 1 {
        return samples.to_vec();
    }

    let num_channels = channels as usize;
    samples
        .chunks_exact(num_channels)
        .map(|frame| frame.iter().sum::<f32>() / num_channels as f32)
        .collect()
}

/// Resample mono audio to 16kHz using rubato.
fn resample_to_16khz(samples: &[f32], input_rate: u32) -> Result<Vec<f32>> {
    if input_rate == WHISPER_SAMPLE_RATE || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let mut resampler = FftFixedIn::<f32>::new(
        input_rate as usize,
        WHISPER_SAMPLE_RATE as usize,
        1024, // chunk size
        2,    // sub chunks
        1,    // channels
    )
    .context("Failed to create resampler")?;

    let mut output = Vec::new();
    let mut input_pos = 0;

    // Full chunks
    let frames_needed = resampler.input_frames_next();
    while input_pos + frames_needed <= samples.len() {
        let input_chunk = vec![samples[input_pos..input_pos + frames_needed].to_vec()];
        let resampled = resampler.process(&input_chunk, None).context("Resampling failed")?;
        output.extend_from_slice(&resampled[0]);
        input_pos += frames_needed;
    }

    // Tail, zero padded; keep only the output that corresponds to real input
    if input_pos < samples.len() {
        let remaining = &samples[input_pos..];
        let mut padded = remaining.to_vec();
        padded.resize(frames_needed, 0.0);
        let input_chunk = vec![padded];
        let resampled = resampler
            .process(&input_chunk, None)
            .context("Resampling final chunk failed")?;

        let remaining_duration = remaining.len() as f64 / input_rate as f64;
        let expected_output = (remaining_duration * WHISPER_SAMPLE_RATE as f64).ceil() as usize;
        let actual_output = expected_output.min(resampled[0].len());
        output.extend_from_slice(&resampled[0][..actual_output]);
    }

    Ok(output)
}

/// Prepare audio for Whisper: mono, 16kHz.
pub fn prepare_for_whisper(audio: &WavAudio, path: &Path) -> Result<Vec<f32>> {
    let mono = to_mono(&audio.samples, audio.channels);
    let samples =
        resample_to_16khz(&mono, audio.sample_rate).map_err(|e| TranscribeError::decode(path, e))?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{error_kind, ErrorKind};
    use std::path::PathBuf;

    fn write_wav(name: &str, sample_rate: u32, channels: u16, samples: &[i16]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("transcryb_wav_{}.wav", name));
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn test_to_mono_stereo() {
        let stereo = vec![1.0, 2.0, 3.0, 4.0];
        let mono = to_mono(&stereo, 2);
        assert_eq!(mono, vec![1.5, 3.5]);
    }

    #[test]
    fn test_to_mono_already_mono() {
        let mono = vec![1.0, 2.0, 3.0];
        let result = to_mono(&mono, 1);
        assert_eq!(result, mono);
    }

    #[test]
    fn test_resample_same_rate() {
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        let result = resample_to_16khz(&samples, 16000).unwrap();
        assert_eq!(result, samples);
    }

    #[test]
    fn test_resample_48k_length() {
        let samples = vec![0.0; 48000];
        let result = resample_to_16khz(&samples, 48000).unwrap();
        // One second in, roughly one second out
        assert!((result.len() as i64 - 16000).abs() <= 1024, "got {}", result.len());
    }

    #[test]
    fn test_resample_empty() {
        let result = resample_to_16khz(&[], 44100).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_read_wav_mono_16k() {
        let path = write_wav("mono16k", 16000, 1, &[0, i16::MAX, i16::MIN, 0]);
        let audio = read_wav(&path).unwrap();

        assert_eq!(audio.sample_rate, 16000);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.samples.len(), 4);
        assert!((audio.samples[1] - 1.0).abs() < 1e-3);
        assert_eq!(audio.samples[2], -1.0);

        let prepared = prepare_for_whisper(&audio, &path).unwrap();
        assert_eq!(prepared.len(), 4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_wav_stereo_mixdown() {
        let path = write_wav("stereo", 16000, 2, &[16384, 0, 16384, 0]);
        let audio = read_wav(&path).unwrap();
        assert_eq!(audio.channels, 2);

        let prepared = prepare_for_whisper(&audio, &path).unwrap();
        assert_eq!(prepared.len(), 2);
        assert!((prepared[0] - 0.25).abs() < 1e-3);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_wav_empty() {
        let path = write_wav("empty", 16000, 1, &[]);
        let audio = read_wav(&path).unwrap();
        assert!(audio.samples.is_empty());
        assert_eq!(audio.duration_secs, 0.0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_wav_nonexistent_is_decode_error() {
        let path = Path::new("/tmp/definitely_nonexistent_transcryb_test.wav");
        let err = read_wav(path).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Decode));
    }

    #[test]
    fn test_read_wav_garbage_is_decode_error() {
        let path = std::env::temp_dir().join("transcryb_wav_garbage.wav");
        std::fs::write(&path, b"not a riff file at all").unwrap();

        let err = read_wav(&path).unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::Decode));

        let _ = std::fs::remove_file(&path);
    }
}
