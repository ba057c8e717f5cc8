//! Noise material: a preloaded pool plus per-file segment selection.
//!
//! The pool is built once per run and holds two views of the noise file: the
//! content-shaped samples that get mixed, and the level-reference samples the
//! meter reads. When the level convention meters at half rate the reference
//! holds half as many samples and all offsets into it are halved.
//!
//! A noise file longer than the speech yields a random (or index-list driven)
//! excerpt; a shorter or equal-length file is tiled from offset zero until it
//! covers the speech, without consuming any randomness.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("cannot read index list {path}: {source}")]
    ReadIndexList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("index list {path} entry {token:?} is not a sample offset")]
    InvalidIndex { path: PathBuf, token: String },
    #[error("index list {path} ran out after {used} entries")]
    IndexListExhausted { path: PathBuf, used: usize },
    #[error("noise start {start} leaves {available} samples, {needed} needed")]
    StartOutOfRange {
        start: usize,
        needed: usize,
        available: usize,
    },
}

/// Where each file's excerpt start comes from.
#[derive(Debug)]
pub enum StartPicker {
    /// Uniform over every start that still fits.
    Random,
    /// Fixed offsets consumed in file order; running out is fatal.
    Indexed {
        path: PathBuf,
        offsets: Vec<usize>,
        next: usize,
    },
}

impl StartPicker {
    /// Build from an optional index-list path.
    pub fn from_index_list(index_list: Option<&Path>) -> Result<StartPicker, NoiseError> {
        let Some(path) = index_list else {
            return Ok(StartPicker::Random);
        };
        let text = std::fs::read_to_string(path).map_err(|source| NoiseError::ReadIndexList {
            path: path.to_path_buf(),
            source,
        })?;
        let mut offsets = Vec::new();
        for token in text.split_whitespace() {
            let offset = token
                .parse::<usize>()
                .map_err(|_| NoiseError::InvalidIndex {
                    path: path.to_path_buf(),
                    token: token.to_string(),
                })?;
            offsets.push(offset);
        }
        Ok(StartPicker::Indexed {
            path: path.to_path_buf(),
            offsets,
            next: 0,
        })
    }

    /// Next start offset given `span + 1` admissible positions.
    fn next_start(&mut self, span: usize, rng: &mut StdRng) -> Result<usize, NoiseError> {
        match self {
            StartPicker::Random => Ok((rng.random::<f64>() * span as f64) as usize),
            StartPicker::Indexed { path, offsets, next } => {
                let Some(&start) = offsets.get(*next) else {
                    return Err(NoiseError::IndexListExhausted {
                        path: path.clone(),
                        used: *next,
                    });
                };
                *next += 1;
                Ok(start)
            }
        }
    }
}

/// The run's noise material, shaped once up front.
pub struct NoisePool {
    raw: Vec<f32>,
    reference: Vec<f32>,
    reference_halved: bool,
}

/// One file's worth of noise, cut or tiled to length.
#[derive(Debug)]
pub struct Excerpt {
    /// Samples to scale and mix, exactly as long as the speech.
    pub raw: Vec<f32>,
    /// Samples the level meter reads; half as long when metering at half rate.
    pub reference: Vec<f32>,
    /// Excerpt start offset; `None` when the pool was tiled.
    pub start: Option<usize>,
    pub tiled: bool,
}

impl NoisePool {
    pub fn new(raw: Vec<f32>, reference: Vec<f32>, reference_halved: bool) -> NoisePool {
        NoisePool {
            raw,
            reference,
            reference_halved,
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Cut an excerpt covering `speech_len` samples.
    pub fn select(
        &self,
        speech_len: usize,
        picker: &mut StartPicker,
        rng: &mut StdRng,
    ) -> Result<Excerpt, NoiseError> {
        if self.raw.len() > speech_len {
            let span = self.raw.len() - speech_len;
            let start = picker.next_start(span, rng)?;
            if start + speech_len > self.raw.len() {
                return Err(NoiseError::StartOutOfRange {
                    start,
                    needed: speech_len,
                    available: self.raw.len().saturating_sub(start),
                });
            }
            let (reference_start, reference_len) = if self.reference_halved {
                (start / 2, speech_len / 2)
            } else {
                (start, speech_len)
            };
            Ok(Excerpt {
                raw: self.raw[start..start + speech_len].to_vec(),
                reference: self.reference[reference_start..reference_start + reference_len]
                    .to_vec(),
                start: Some(start),
                tiled: false,
            })
        } else {
            // equal lengths come through here too: one full copy, offset zero
            let reference_len = if self.reference_halved {
                speech_len / 2
            } else {
                speech_len
            };
            Ok(Excerpt {
                raw: tile(&self.raw, speech_len),
                reference: tile(&self.reference, reference_len),
                start: None,
                tiled: self.raw.len() < speech_len,
            })
        }
    }
}

fn tile(source: &[f32], len: usize) -> Vec<f32> {
    source.iter().copied().cycle().take(len).collect()
}
