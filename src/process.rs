//! Per-file pipeline: filter, measure, normalize, mix, correct, write.
//!
//! [`run`] drives a whole batch from one immutable [`ProcessingConfig`]. The
//! noise file is loaded and shaped once up front; each speech file then goes
//! through the same fixed stage order, with segment start and SNR jitter
//! drawn from one run-wide random stream so a seeded batch reproduces
//! exactly.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{info, warn};

use crate::codec::{self, CodecError};
use crate::config::{ConfigError, FilterType, LevelMode, ProcessingConfig, SampleRate};
use crate::dsp::aweight::a_weight;
use crate::dsp::dc::remove_dc;
use crate::dsp::dispatch::{FilterCountMismatch, apply_filter};
use crate::dsp::level;
use crate::lists::ListError;
use crate::mix::{self, MixLengthMismatch};
use crate::noise::{NoiseError, NoisePool, StartPicker};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error(transparent)]
    Filter(#[from] FilterCountMismatch),
    #[error(transparent)]
    Mix(#[from] MixLengthMismatch),
}

/// What happened to one file, for logging and for callers that want to
/// post-process the batch.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Active speech level before any normalization, in dB.
    pub speech_level_db: f64,
    /// Excerpt start offset into the noise file; `None` without mixing or
    /// when the noise was tiled.
    pub noise_start: Option<usize>,
    pub noise_tiled: bool,
    /// Long-term RMS level of the selected noise segment, in dB.
    pub noise_level_db: Option<f64>,
    /// The SNR actually applied, after any random jitter.
    pub snr_db: Option<f64>,
    /// Divisor applied by overload correction, when one was needed.
    pub overload_factor: Option<f64>,
    /// Level the output actually sits at when normalization was requested.
    pub achieved_norm_db: Option<f64>,
    pub samples_written: usize,
}

/// Noise material shared across the batch.
pub struct NoiseContext {
    pool: NoisePool,
    picker: StartPicker,
}

/// Shape a level-measurement reference from content samples.
///
/// The convention decides the shaping: the default telephone-band reference,
/// the plain 0-4 kHz band (downsampled from 16 kHz data), the full 0-8 kHz
/// band, or A-weighting. DC removal runs at the meter rate, after any
/// downsampling, and never together with A-weighting. A-weighted 16 kHz
/// references keep only their first half so the meter windows stay
/// comparable with the half-rate conventions.
pub fn prepare_reference(
    signal: &[f32],
    config: &ProcessingConfig,
) -> Result<Vec<f32>, FilterCountMismatch> {
    let (meter_rate, halved) = config.meter_rate();
    let mut reference = signal.to_vec();
    match config.level_mode {
        LevelMode::G712 => {
            let filter = match config.sample_rate {
                SampleRate::Hz8k => FilterType::G712,
                SampleRate::Hz16k => FilterType::G712From16k,
            };
            apply_filter(&mut reference, filter)?;
        }
        LevelMode::Band4k => {
            if config.sample_rate == SampleRate::Hz16k {
                apply_filter(&mut reference, FilterType::Downsample2)?;
            }
        }
        LevelMode::Band8k => {}
        LevelMode::AWeight => {
            a_weight(&mut reference, config.sample_rate);
            if halved {
                let half = reference.len() / 2;
                reference.truncate(half);
            }
        }
    }
    if config.dc_compensation && config.level_mode != LevelMode::AWeight {
        remove_dc(&mut reference, meter_rate);
    }
    Ok(reference)
}

/// Load the noise file and shape both of its views.
pub fn build_noise_context(config: &ProcessingConfig) -> Result<Option<NoiseContext>, ProcessError> {
    let Some(mix_config) = &config.mix else {
        return Ok(None);
    };
    let mut raw = codec::read_samples(&mix_config.noise_file, config.sample_rate.hz())?;
    // the level reference reflects the noise as loaded; only the mixed copy
    // is content filtered
    let reference = prepare_reference(&raw, config)?;
    if let Some(filter) = config.content_filter() {
        apply_filter(&mut raw, filter)?;
    }
    let (_, halved) = config.meter_rate();
    info!(
        noise = %mix_config.noise_file.display(),
        samples = raw.len(),
        "noise material loaded"
    );
    let picker = StartPicker::from_index_list(mix_config.index_list.as_deref())?;
    Ok(Some(NoiseContext {
        pool: NoisePool::new(raw, reference, halved),
        picker,
    }))
}

/// Process one input file into one output file.
pub fn process_file(
    input: &Path,
    output: &Path,
    config: &ProcessingConfig,
    noise: Option<&mut NoiseContext>,
    rng: &mut StdRng,
) -> Result<FileReport, ProcessError> {
    let mut speech = codec::read_samples(input, config.sample_rate.hz())?;

    // levels are read off the signal as loaded; content filtering only
    // shapes what gets written
    let (meter_rate, _) = config.meter_rate();
    let reference = prepare_reference(&speech, config)?;
    let speech_levels = level::measure(&reference, f64::from(meter_rate.hz()));
    let measured_db = speech_levels.active_db;

    if let Some(filter) = config.content_filter() {
        apply_filter(&mut speech, filter)?;
    }

    // normalization rescales the content; the level used for SNR scaling is
    // the one the content actually sits at afterwards
    let mut effective_speech_db = measured_db;
    if let Some(target_db) = config.norm_level_db {
        let gain = 10f64.powf((target_db - measured_db) / 20.0);
        mix::scale(&mut speech, gain);
        effective_speech_db = target_db;
    }

    let mut noise_start = None;
    let mut noise_tiled = false;
    let mut noise_level_db = None;
    let mut applied_snr_db = None;
    if let (Some(context), Some(mix_config)) = (noise, &config.mix) {
        // the start draw always precedes the jitter draw
        let excerpt = context
            .pool
            .select(speech.len(), &mut context.picker, rng)?;
        let snr_db = mix::effective_snr(mix_config.snr_db, mix_config.snr_range_db, rng);
        let segment_levels = level::measure(&excerpt.reference, f64::from(meter_rate.hz()));
        let gain = mix::snr_gain(effective_speech_db, segment_levels.rms_db, snr_db);
        let mut segment = excerpt.raw;
        mix::scale(&mut segment, gain);
        mix::add_into(&mut speech, &segment)?;
        noise_start = excerpt.start;
        noise_tiled = excerpt.tiled;
        noise_level_db = Some(segment_levels.rms_db);
        applied_snr_db = Some(snr_db);
    }

    let overload_factor = mix::correct_overload(&mut speech);
    let achieved_norm_db = config.norm_level_db.map(|target_db| match overload_factor {
        Some(factor) => target_db - 20.0 * factor.log10(),
        None => target_db,
    });

    codec::write_samples(output, &speech, config.sample_rate.hz())?;
    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        speech_level_db: measured_db,
        noise_start,
        noise_tiled,
        noise_level_db,
        snr_db: applied_snr_db,
        overload_factor,
        achieved_norm_db,
        samples_written: speech.len(),
    })
}

/// Run the whole batch.
pub fn run(
    pairs: &[(PathBuf, PathBuf)],
    config: &ProcessingConfig,
) -> Result<Vec<FileReport>, ProcessError> {
    config.validate()?;
    info!(
        files = pairs.len(),
        rate_hz = config.sample_rate.hz(),
        filter = config
            .content_filter()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "none".into()),
        levels = %config.level_mode,
        "starting batch"
    );

    let mut rng = match config.mix.as_ref().and_then(|mix| mix.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut noise = build_noise_context(config)?;

    let mut reports = Vec::with_capacity(pairs.len());
    for (input, output) in pairs {
        let report = process_file(input, output, config, noise.as_mut(), &mut rng)?;
        info!(
            input = %report.input.display(),
            output = %report.output.display(),
            speech_db = format_args!("{:.2}", report.speech_level_db),
            noise_db = report.noise_level_db.map(|db| format!("{db:.2}")),
            snr_db = report.snr_db.map(|snr| format!("{snr:.2}")),
            samples = report.samples_written,
            "file processed"
        );
        if let Some(factor) = report.overload_factor {
            warn!(
                output = %report.output.display(),
                divisor = format_args!("{factor:.4}"),
                achieved_db = report.achieved_norm_db.map(|db| format!("{db:.2}")),
                "overload corrected"
            );
        }
        reports.push(report);
    }

    let overloads = reports
        .iter()
        .filter(|report| report.overload_factor.is_some())
        .count();
    info!(files = reports.len(), overloads, "batch finished");
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MixConfig;
    use std::f64::consts::PI;
    use tempfile::tempdir;

    fn tone(freq_hz: f64, rate_hz: f64, amplitude: f64, len: usize) -> Vec<f32> {
        (0..len)
            .map(|n| (amplitude * (2.0 * PI * freq_hz * n as f64 / rate_hz).sin()) as f32)
            .collect()
    }

    fn plain_config() -> ProcessingConfig {
        ProcessingConfig {
            sample_rate: SampleRate::Hz8k,
            filter: None,
            level_mode: LevelMode::G712,
            dc_compensation: false,
            norm_level_db: None,
            mix: None,
        }
    }

    #[test]
    fn reference_shaping_preserves_or_halves_length() {
        let signal = tone(1000.0, 16000.0, 0.5, 4000);
        let mut config = plain_config();
        config.sample_rate = SampleRate::Hz16k;

        config.level_mode = LevelMode::G712;
        assert_eq!(prepare_reference(&signal, &config).unwrap().len(), 2000);
        config.level_mode = LevelMode::Band4k;
        assert_eq!(prepare_reference(&signal, &config).unwrap().len(), 2000);
        config.level_mode = LevelMode::Band8k;
        assert_eq!(prepare_reference(&signal, &config).unwrap().len(), 4000);
        config.level_mode = LevelMode::AWeight;
        assert_eq!(prepare_reference(&signal, &config).unwrap().len(), 2000);
    }

    #[test]
    fn dc_removal_skipped_under_a_weighting() {
        // both paths must strip the offset, each through its own stage
        let offset: Vec<f32> = tone(1000.0, 8000.0, 0.2, 8000)
            .iter()
            .map(|s| s + 0.4)
            .collect();
        let mut config = plain_config();
        config.dc_compensation = true;
        config.level_mode = LevelMode::AWeight;
        let reference = prepare_reference(&offset, &config).unwrap();
        let tail = &reference[4000..];
        let mean: f64 = tail.iter().map(|&s| f64::from(s)).sum::<f64>() / tail.len() as f64;
        assert!(mean.abs() < 1e-2);
    }

    #[test]
    fn normalization_moves_the_active_level() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.raw");
        let output = dir.path().join("out.raw");
        codec::write_samples(&input, &tone(1000.0, 8000.0, 0.25, 16000), 8000).unwrap();

        let mut config = plain_config();
        config.level_mode = LevelMode::Band4k;
        config.norm_level_db = Some(-20.0);
        let mut rng = StdRng::seed_from_u64(1);
        let report = process_file(&input, &output, &config, None, &mut rng).unwrap();
        assert!(report.overload_factor.is_none());
        assert_eq!(report.achieved_norm_db, Some(-20.0));

        let written = codec::read_samples(&output, 8000).unwrap();
        let levels = level::measure(&written, 8000.0);
        assert!((levels.active_db + 20.0).abs() < 0.7, "{}", levels.active_db);
    }

    #[test]
    fn loud_normalization_target_triggers_overload_correction() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.raw");
        let output = dir.path().join("out.raw");
        codec::write_samples(&input, &tone(1000.0, 8000.0, 0.25, 16000), 8000).unwrap();

        let mut config = plain_config();
        config.level_mode = LevelMode::Band4k;
        config.norm_level_db = Some(0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let report = process_file(&input, &output, &config, None, &mut rng).unwrap();
        let factor = report.overload_factor.unwrap();
        assert!(factor > 1.0);
        assert!(report.achieved_norm_db.unwrap() < 0.0);

        let written = codec::read_samples(&output, 8000).unwrap();
        let peak = written.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        assert!(peak <= 1.0);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let dir = tempdir().unwrap();
        let speech_path = dir.path().join("speech.raw");
        let noise_path = dir.path().join("noise.raw");
        codec::write_samples(&speech_path, &tone(1000.0, 8000.0, 0.3, 8000), 8000).unwrap();
        codec::write_samples(&noise_path, &tone(333.0, 8000.0, 0.2, 32000), 8000).unwrap();

        let mut config = plain_config();
        config.level_mode = LevelMode::Band4k;
        config.mix = Some(MixConfig {
            noise_file: noise_path,
            snr_db: 10.0,
            snr_range_db: Some(5.0),
            index_list: None,
            seed: Some(42),
        });

        let out_a = dir.path().join("a.raw");
        let out_b = dir.path().join("b.raw");
        let pairs_a = vec![(speech_path.clone(), out_a.clone())];
        let pairs_b = vec![(speech_path, out_b.clone())];
        let reports_a = run(&pairs_a, &config).unwrap();
        let reports_b = run(&pairs_b, &config).unwrap();
        assert_eq!(reports_a[0].noise_start, reports_b[0].noise_start);
        assert_eq!(reports_a[0].snr_db, reports_b[0].snr_db);
        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }
}
