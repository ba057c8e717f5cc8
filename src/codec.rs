//! Sample I/O: mono 16-bit PCM, either inside a WAV container or as raw
//! headerless little-endian data. The container is chosen by file extension.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid wav {path}: {source}")]
    Wav { path: PathBuf, source: hound::Error },
    #[error("{path} must be mono, found {channels} channels")]
    NotMono { path: PathBuf, channels: u16 },
    #[error("{path} is sampled at {found} Hz, expected {expected} Hz")]
    RateMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
    #[error("{path} has an unsupported sample format ({bits}-bit)")]
    UnsupportedFormat { path: PathBuf, bits: u16 },
    #[error("{path} contains no samples")]
    Empty { path: PathBuf },
}

/// Load a whole file into normalized `f32` samples in `[-1, 1)`.
///
/// `.wav` files must be mono 16-bit PCM at `expected_rate`; any other
/// extension is read as raw 16-bit little-endian PCM and trusted to match.
pub fn read_samples(path: &Path, expected_rate: u32) -> Result<Vec<f32>, CodecError> {
    let samples = if is_wav(path) {
        read_wav(path, expected_rate)?
    } else {
        read_raw(path)?
    };
    if samples.is_empty() {
        return Err(CodecError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(samples)
}

/// Store samples as mono 16-bit PCM, WAV or raw depending on the extension.
pub fn write_samples(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), CodecError> {
    if is_wav(path) {
        write_wav(path, samples, sample_rate)
    } else {
        write_raw(path, samples)
    }
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

fn read_wav(path: &Path, expected_rate: u32) -> Result<Vec<f32>, CodecError> {
    let map_wav = |source| CodecError::Wav {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = hound::WavReader::open(path).map_err(map_wav)?;
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(CodecError::NotMono {
            path: path.to_path_buf(),
            channels: spec.channels,
        });
    }
    if spec.sample_rate != expected_rate {
        return Err(CodecError::RateMismatch {
            path: path.to_path_buf(),
            found: spec.sample_rate,
            expected: expected_rate,
        });
    }
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        return Err(CodecError::UnsupportedFormat {
            path: path.to_path_buf(),
            bits: spec.bits_per_sample,
        });
    }
    reader
        .samples::<i16>()
        .map(|sample| sample.map(i16_to_f32).map_err(map_wav))
        .collect()
}

fn read_raw(path: &Path) -> Result<Vec<f32>, CodecError> {
    let bytes = std::fs::read(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // A trailing odd byte cannot form a sample and is ignored.
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16_to_f32(i16::from_le_bytes([pair[0], pair[1]])))
        .collect())
}

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), CodecError> {
    let map_wav = |source| CodecError::Wav {
        path: path.to_path_buf(),
        source,
    };
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(map_wav)?;
    for &sample in samples {
        writer.write_sample(f32_to_i16(sample)).map_err(map_wav)?;
    }
    writer.finalize().map_err(map_wav)
}

fn write_raw(path: &Path, samples: &[f32]) -> Result<(), CodecError> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&f32_to_i16(sample).to_le_bytes());
    }
    std::fs::write(path, bytes).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn i16_to_f32(sample: i16) -> f32 {
    f32::from(sample) / 32768.0
}

/// Rounding, saturating conversion back to 16-bit.
pub(crate) fn f32_to_i16(sample: f32) -> i16 {
    (f64::from(sample) * 32768.0)
        .round()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn conversion_saturates_and_rounds() {
        assert_eq!(f32_to_i16(0.0), 0);
        assert_eq!(f32_to_i16(1.5), i16::MAX);
        assert_eq!(f32_to_i16(-1.5), i16::MIN);
        assert_eq!(f32_to_i16(0.5), 16384);
        assert!((i16_to_f32(16384) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn raw_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.raw");
        let samples = vec![0.0, 0.25, -0.25, 0.999];
        write_samples(&path, &samples, 8000).unwrap();
        let loaded = read_samples(&path, 8000).unwrap();
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in loaded.iter().zip(&samples) {
            assert!((a - b).abs() < 1.0 / 32768.0);
        }
    }

    #[test]
    fn wav_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples = vec![0.0, 0.5, -0.5, 0.1];
        write_samples(&path, &samples, 16000).unwrap();
        let loaded = read_samples(&path, 16000).unwrap();
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in loaded.iter().zip(&samples) {
            assert!((a - b).abs() < 1.0 / 32768.0);
        }
    }

    #[test]
    fn wav_rate_mismatch_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        write_samples(&path, &[0.1, 0.2], 16000).unwrap();
        let err = read_samples(&path, 8000).unwrap_err();
        assert!(matches!(err, CodecError::RateMismatch { found: 16000, .. }));
    }

    #[test]
    fn empty_file_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.raw");
        std::fs::write(&path, []).unwrap();
        assert!(matches!(
            read_samples(&path, 8000),
            Err(CodecError::Empty { .. })
        ));
    }
}
