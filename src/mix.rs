//! Gain computation, noise scaling, summation and overload correction.

use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Speech and noise buffers must already agree in length when summed.
#[derive(Debug, Error)]
#[error("cannot mix {speech} speech samples with {noise} noise samples")]
pub struct MixLengthMismatch {
    pub speech: usize,
    pub noise: usize,
}

/// Linear gain that places the noise `snr_db` below the speech level.
///
/// Both levels are in dB relative to the same full-scale reference, so the
/// gain is independent of the absolute calibration.
pub fn snr_gain(speech_level_db: f64, noise_level_db: f64, snr_db: f64) -> f64 {
    10f64.powf(((speech_level_db - snr_db) - noise_level_db) / 20.0)
}

/// Draw the file's SNR: the configured target, plus a uniform one-sided
/// offset in `[0, range]` when a range is set. A zero range still consumes
/// one draw so index-list runs stay reproducible whether or not the range
/// is configured.
pub fn effective_snr(snr_db: f64, range_db: Option<f64>, rng: &mut StdRng) -> f64 {
    match range_db {
        Some(range) => snr_db + rng.random::<f64>() * range,
        None => snr_db,
    }
}

/// Scale a buffer in place by a linear gain.
pub fn scale(signal: &mut [f32], gain: f64) {
    for sample in signal.iter_mut() {
        *sample = (f64::from(*sample) * gain) as f32;
    }
}

/// Add `noise` into `speech` sample by sample.
pub fn add_into(speech: &mut [f32], noise: &[f32]) -> Result<(), MixLengthMismatch> {
    if speech.len() != noise.len() {
        return Err(MixLengthMismatch {
            speech: speech.len(),
            noise: noise.len(),
        });
    }
    for (sample, &addend) in speech.iter_mut().zip(noise) {
        *sample += addend;
    }
    Ok(())
}

/// Rescale the whole buffer when any sample exceeds full scale.
///
/// Returns the correction divisor when one was applied. Signals that already
/// fit pass through bit for bit.
pub fn correct_overload(signal: &mut [f32]) -> Option<f64> {
    let peak = signal
        .iter()
        .fold(0.0f64, |max, &sample| max.max(f64::from(sample).abs()));
    if peak <= 1.0 {
        return None;
    }
    let inverse = 1.0 / peak;
    for sample in signal.iter_mut() {
        *sample = (f64::from(*sample) * inverse) as f32;
    }
    Some(peak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn gain_follows_the_level_difference() {
        // equal levels at 5 dB SNR attenuate the noise by 10^(-5/20)
        let gain = snr_gain(-26.0, -26.0, 5.0);
        assert!((gain - 0.5623413251903491).abs() < 1e-12);
        // equal levels at 10 dB SNR attenuate by exactly 10^(-1/2)
        let gain = snr_gain(-26.0, -26.0, 10.0);
        assert!((gain - 0.31622776601683794).abs() < 1e-12);
        // 10 dB quieter noise at 0 dB SNR gets boosted
        let gain = snr_gain(-26.0, -36.0, 0.0);
        assert!((gain - 10f64.powf(0.5)).abs() < 1e-12);
    }

    #[test]
    fn zero_snr_equal_levels_is_unity() {
        assert!((snr_gain(-20.0, -20.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn effective_snr_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let snr = effective_snr(5.0, Some(10.0), &mut rng);
            assert!((5.0..=15.0).contains(&snr));
        }
        assert_eq!(effective_snr(5.0, None, &mut rng), 5.0);
    }

    #[test]
    fn mismatched_lengths_refuse_to_mix() {
        let mut speech = vec![0.0f32; 10];
        let noise = vec![0.0f32; 9];
        assert!(add_into(&mut speech, &noise).is_err());
    }

    #[test]
    fn in_range_signal_passes_untouched() {
        let original = vec![0.5f32, -0.99, 0.25, 1.0];
        let mut signal = original.clone();
        assert!(correct_overload(&mut signal).is_none());
        assert_eq!(signal, original);
    }

    #[test]
    fn overload_rescales_everything_by_the_peak() {
        let mut signal = vec![0.5f32, -2.0, 1.0];
        let factor = correct_overload(&mut signal).unwrap();
        assert!((factor - 2.0).abs() < 1e-9);
        assert!((signal[0] - 0.25).abs() < 1e-6);
        assert!((signal[1] + 1.0).abs() < 1e-6);
        assert!((signal[2] - 0.5).abs() < 1e-6);
        let peak = signal.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        assert!(peak <= 1.0);
    }

    #[test]
    fn mixing_sums_sample_by_sample() {
        let mut speech = vec![0.1f32, 0.2, -0.3];
        let mut noise = vec![1.0f32, -1.0, 1.0];
        scale(&mut noise, 0.1);
        add_into(&mut speech, &noise).unwrap();
        assert!((speech[0] - 0.2).abs() < 1e-6);
        assert!((speech[1] - 0.1).abs() < 1e-6);
        assert!((speech[2] + 0.2).abs() < 1e-6);
    }
}
