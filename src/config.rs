//! Run configuration: filter selection, level-estimation convention,
//! normalization and noise-mixing parameters.
//!
//! A [`ProcessingConfig`] is built once from the command line and shared
//! read-only across every file in the batch. Cross-field constraints are
//! checked by [`ProcessingConfig::validate`] before any file is touched.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Supported mono sample rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRate {
    Hz8k,
    Hz16k,
}

impl SampleRate {
    pub fn hz(self) -> u32 {
        match self {
            SampleRate::Hz8k => 8000,
            SampleRate::Hz16k => 16000,
        }
    }
}

/// Named filter characteristics understood by the dispatcher.
///
/// The first four are user-selectable content filters; the last three are
/// used internally for level-reference shaping and the 16 kHz variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Telephone-band channel mask (cascaded biquads, 8 kHz).
    G712,
    /// P.341 send-side bandpass, 8 kHz design.
    P341,
    /// IRS send-side bandpass, 8 kHz design.
    Irs,
    /// Modified-IRS bandpass, applied at twice the rate via a 1:2/2:1 chain.
    Mirs,
    /// P.341 bandpass designed for 16 kHz data.
    P341At16k,
    /// 2:1 downsample followed by the telephone-band mask; output halves.
    G712From16k,
    /// Plain 2:1 downsample; output halves.
    Downsample2,
}

impl FilterType {
    /// Group delay of the kernel family in output samples. Padded before the
    /// kernel runs and trimmed off the front afterwards.
    pub fn shift(self) -> usize {
        match self {
            FilterType::G712 | FilterType::G712From16k | FilterType::Downsample2 => 0,
            FilterType::P341 => 125,
            FilterType::Irs => 75,
            FilterType::Mirs => 182,
            FilterType::P341At16k => 296,
        }
    }

    /// Parse a user-facing filter name.
    pub fn parse(name: &str) -> Option<FilterType> {
        match name {
            "g712" => Some(FilterType::G712),
            "p341" => Some(FilterType::P341),
            "irs" => Some(FilterType::Irs),
            "mirs" => Some(FilterType::Mirs),
            _ => None,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterType::G712 => "G.712",
            FilterType::P341 => "P.341",
            FilterType::Irs => "IRS",
            FilterType::Mirs => "MIRS",
            FilterType::P341At16k => "P.341 (16 kHz)",
            FilterType::G712From16k => "G.712 via 2:1 downsample",
            FilterType::Downsample2 => "2:1 downsample",
        };
        f.write_str(name)
    }
}

/// Which spectral shaping runs before speech and noise levels are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelMode {
    /// Default: levels measured after telephone-band (G.712) filtering.
    G712,
    /// Full 0-4 kHz band; 16 kHz data is downsampled 2:1 first.
    Band4k,
    /// Full 0-8 kHz band; only meaningful for 16 kHz data.
    Band8k,
    /// Levels measured after A-weighting.
    AWeight,
}

impl LevelMode {
    /// Parse a user-facing mode name.
    pub fn parse(name: &str) -> Option<LevelMode> {
        match name {
            "snr_4khz" => Some(LevelMode::Band4k),
            "snr_8khz" => Some(LevelMode::Band8k),
            "a_weight" => Some(LevelMode::AWeight),
            _ => None,
        }
    }
}

impl fmt::Display for LevelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LevelMode::G712 => "after G.712 filtering",
            LevelMode::Band4k => "from the 0-4 kHz range",
            LevelMode::Band8k => "from the 0-8 kHz range",
            LevelMode::AWeight => "after A-weighting",
        };
        f.write_str(name)
    }
}

/// Noise-mixing parameters; present only when a noise file was configured.
#[derive(Debug, Clone)]
pub struct MixConfig {
    pub noise_file: PathBuf,
    /// Target SNR in dB, the floor when a range is configured.
    pub snr_db: f64,
    /// One-sided additive range: the drawn SNR lies in `[snr, snr + range]`.
    pub snr_range_db: Option<f64>,
    /// Deterministic start offsets, one consumed per mixed file.
    pub index_list: Option<PathBuf>,
    /// Seed for segment selection and SNR jitter; OS-seeded when absent.
    pub seed: Option<u64>,
}

/// Immutable per-run processing configuration.
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub sample_rate: SampleRate,
    /// Content filter applied to speech (and the raw noise signal).
    pub filter: Option<FilterType>,
    pub level_mode: LevelMode,
    /// Apply DC-offset removal before level measurement (except A-weighting).
    pub dc_compensation: bool,
    /// Target active speech level in dB; `None` disables normalization.
    pub norm_level_db: Option<f64>,
    pub mix: Option<MixConfig>,
}

/// Configuration errors; all abort the run before any file is processed.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("adding noise requires a target SNR")]
    MixingWithoutSnr,
    #[error("16 kHz processing cannot be combined with {0} filtering")]
    NarrowbandFilterAt16k(FilterType),
    #[error("the 0-8 kHz level convention requires 16 kHz data")]
    Band8kRequires16k,
    #[error("nothing to do: configure a filter, a normalization level or a noise file")]
    NothingToDo,
}

impl ProcessingConfig {
    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = self.filter {
            let narrowband = matches!(
                filter,
                FilterType::G712 | FilterType::Irs | FilterType::Mirs
            );
            if self.sample_rate == SampleRate::Hz16k && narrowband {
                return Err(ConfigError::NarrowbandFilterAt16k(filter));
            }
        }
        if self.level_mode == LevelMode::Band8k && self.sample_rate == SampleRate::Hz8k {
            return Err(ConfigError::Band8kRequires16k);
        }
        if self.filter.is_none() && self.norm_level_db.is_none() && self.mix.is_none() {
            return Err(ConfigError::NothingToDo);
        }
        Ok(())
    }

    /// The content filter actually dispatched: P.341 silently promotes to its
    /// 16 kHz design when processing 16 kHz data.
    pub fn content_filter(&self) -> Option<FilterType> {
        match (self.filter, self.sample_rate) {
            (Some(FilterType::P341), SampleRate::Hz16k) => Some(FilterType::P341At16k),
            (filter, _) => filter,
        }
    }

    /// Rate the level meter runs at, and whether the reference buffer is
    /// reduced to half length first.
    pub fn meter_rate(&self) -> (SampleRate, bool) {
        if self.sample_rate == SampleRate::Hz16k && self.level_mode != LevelMode::Band8k {
            (SampleRate::Hz8k, true)
        } else {
            (self.sample_rate, false)
        }
    }
}
