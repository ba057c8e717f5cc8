//! End-to-end batch runs through the public pipeline API.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use noisemix::codec;
use noisemix::config::{FilterType, LevelMode, MixConfig, ProcessingConfig, SampleRate};
use noisemix::process;
use tempfile::tempdir;

fn tone(freq_hz: f64, rate_hz: f64, amplitude: f64, len: usize) -> Vec<f32> {
    (0..len)
        .map(|n| (amplitude * (2.0 * PI * freq_hz * n as f64 / rate_hz).sin()) as f32)
        .collect()
}

fn write_raw(path: &Path, samples: &[f32]) {
    codec::write_samples(path, samples, 8000).unwrap();
}

fn base_config() -> ProcessingConfig {
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
fn mixing_keeps_length_and_stays_in_range() {
    let dir = tempdir().unwrap();
    let speech_path = dir.path().join("speech.raw");
    let noise_path = dir.path().join("noise.raw");
    let output_path = dir.path().join("noisy.raw");
    write_raw(&speech_path, &tone(1000.0, 8000.0, 0.9, 8000));
    write_raw(&noise_path, &tone(250.0, 8000.0, 0.7, 16000));

    let mut config = base_config();
    config.mix = Some(MixConfig {
        noise_file: noise_path,
        snr_db: 5.0,
        snr_range_db: None,
        index_list: None,
        seed: Some(1234),
    });

    let pairs = vec![(speech_path.clone(), output_path.clone())];
    let reports = process::run(&pairs, &config).unwrap();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.samples_written, 8000);
    assert_eq!(report.snr_db, Some(5.0));
    assert!(!report.noise_tiled);
    assert!(report.noise_start.is_some());

    let noisy = codec::read_samples(&output_path, 8000).unwrap();
    assert_eq!(noisy.len(), 8000);
    let peak = noisy.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
    assert!(peak <= 1.0);

    // the output must actually contain noise
    let clean = codec::read_samples(&speech_path, 8000).unwrap();
    let diff: f64 = noisy
        .iter()
        .zip(&clean)
        .map(|(a, b)| f64::from(a - b).abs())
        .sum();
    assert!(diff > 1.0);
}

#[test]
fn short_noise_is_tiled_over_the_speech() {
    let dir = tempdir().unwrap();
    let speech_path = dir.path().join("speech.raw");
    let noise_path = dir.path().join("noise.raw");
    let output_path = dir.path().join("noisy.raw");
    write_raw(&speech_path, &tone(1000.0, 8000.0, 0.5, 1300));
    write_raw(&noise_path, &tone(313.0, 8000.0, 0.4, 500));

    let mut config = base_config();
    config.mix = Some(MixConfig {
        noise_file: noise_path,
        snr_db: 10.0,
        snr_range_db: None,
        index_list: None,
        seed: Some(5),
    });

    let pairs = vec![(speech_path, output_path)];
    let reports = process::run(&pairs, &config).unwrap();
    assert!(reports[0].noise_tiled);
    assert_eq!(reports[0].noise_start, None);
    assert_eq!(reports[0].samples_written, 1300);
}

#[test]
fn filter_only_batch_preserves_sample_counts() {
    let dir = tempdir().unwrap();
    let mut pairs = Vec::new();
    for (idx, len) in [4000usize, 5555].iter().enumerate() {
        let input = dir.path().join(format!("in{idx}.raw"));
        write_raw(&input, &tone(700.0, 8000.0, 0.4, *len));
        pairs.push((input, dir.path().join(format!("out{idx}.raw"))));
    }

    let mut config = base_config();
    config.filter = Some(FilterType::P341);
    let reports = process::run(&pairs, &config).unwrap();
    assert_eq!(reports[0].samples_written, 4000);
    assert_eq!(reports[1].samples_written, 5555);
    for (_, output) in &pairs {
        assert!(output.exists());
    }
}

#[test]
fn index_list_fixes_the_noise_starts() {
    let dir = tempdir().unwrap();
    let noise_path = dir.path().join("noise.raw");
    write_raw(&noise_path, &tone(250.0, 8000.0, 0.5, 32000));
    let index_path = dir.path().join("starts.txt");
    std::fs::write(&index_path, "0\n16000\n").unwrap();

    let mut pairs: Vec<(PathBuf, PathBuf)> = Vec::new();
    for idx in 0..2 {
        let input = dir.path().join(format!("in{idx}.raw"));
        write_raw(&input, &tone(1000.0, 8000.0, 0.5, 8000));
        pairs.push((input, dir.path().join(format!("out{idx}.raw"))));
    }

    let mut config = base_config();
    config.mix = Some(MixConfig {
        noise_file: noise_path,
        snr_db: 15.0,
        snr_range_db: None,
        index_list: Some(index_path),
        seed: Some(0),
    });

    let reports = process::run(&pairs, &config).unwrap();
    assert_eq!(reports[0].noise_start, Some(0));
    assert_eq!(reports[1].noise_start, Some(16000));
}

#[test]
fn normalization_and_mixing_combine() {
    let dir = tempdir().unwrap();
    let speech_path = dir.path().join("speech.raw");
    let noise_path = dir.path().join("noise.raw");
    let output_path = dir.path().join("noisy.raw");
    write_raw(&speech_path, &tone(1000.0, 8000.0, 0.1, 16000));
    write_raw(&noise_path, &tone(333.0, 8000.0, 0.3, 48000));

    let mut config = base_config();
    config.level_mode = LevelMode::Band4k;
    config.norm_level_db = Some(-26.0);
    config.mix = Some(MixConfig {
        noise_file: noise_path,
        snr_db: 20.0,
        snr_range_db: Some(0.0),
        index_list: None,
        seed: Some(77),
    });

    let pairs = vec![(speech_path, output_path.clone())];
    let reports = process::run(&pairs, &config).unwrap();
    let report = &reports[0];
    assert_eq!(report.snr_db, Some(20.0));
    assert!(report.achieved_norm_db.is_some());

    let noisy = codec::read_samples(&output_path, 8000).unwrap();
    let power: f64 = noisy.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    let rms_db = 10.0 * (power / noisy.len() as f64).log10();
    // a steady tone's RMS tracks its active level
    assert!((rms_db + 26.0).abs() < 1.5, "rms {rms_db}");
}
