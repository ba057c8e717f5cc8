//! Long-term level measurement following the ITU-T P.56 active speech level
//! convention (method B).
//!
//! The meter tracks a smoothed envelope of the rectified signal and counts,
//! for fifteen binary-spaced thresholds, how many samples (plus a 200 ms
//! hangover) the envelope spends above each. The active level is the
//! per-threshold level at which it exceeds the threshold by the 15.9 dB
//! margin, refined by binary interpolation. Silence-heavy material therefore
//! measures close to the level of its active stretches rather than the
//! whole-file RMS.

const THRESHOLD_COUNT: usize = 15;
const MARGIN_DB: f64 = 15.9;
const INTERPOLATION_TOL_DB: f64 = 0.5;
const ENVELOPE_TIME_S: f64 = 0.03;
const HANGOVER_S: f64 = 0.2;
const SILENCE_FLOOR_DB: f64 = -100.0;

/// Levels measured over one signal window, in dB relative to full scale.
#[derive(Debug, Clone, Copy)]
pub struct Levels {
    /// Long-term active speech level.
    pub active_db: f64,
    /// Plain long-term RMS level over the whole window.
    pub rms_db: f64,
}

/// Measure a whole window. Pure function of its input; the meter keeps no
/// state across calls.
pub fn measure(signal: &[f32], sample_rate_hz: f64) -> Levels {
    if signal.is_empty() {
        return Levels {
            active_db: SILENCE_FLOOR_DB,
            rms_db: SILENCE_FLOOR_DB,
        };
    }

    let smoothing = (-1.0 / (sample_rate_hz * ENVELOPE_TIME_S)).exp();
    let hangover = (HANGOVER_S * sample_rate_hz).round() as u64;
    let thresholds: [f64; THRESHOLD_COUNT] =
        std::array::from_fn(|j| 2.0f64.powi(j as i32 - THRESHOLD_COUNT as i32));

    let mut sum_squares = 0.0f64;
    let mut envelope_first = 0.0f64;
    let mut envelope = 0.0f64;
    let mut activity = [0u64; THRESHOLD_COUNT];
    let mut hang = [hangover; THRESHOLD_COUNT];

    for &sample in signal {
        let magnitude = f64::from(sample).abs();
        sum_squares += magnitude * magnitude;
        envelope_first = smoothing * envelope_first + (1.0 - smoothing) * magnitude;
        envelope = smoothing * envelope + (1.0 - smoothing) * envelope_first;
        for j in 0..THRESHOLD_COUNT {
            if envelope >= thresholds[j] {
                activity[j] += 1;
                hang[j] = 0;
            } else if hang[j] < hangover {
                activity[j] += 1;
                hang[j] += 1;
            }
        }
    }

    let count = signal.len() as f64;
    let rms_db = if sum_squares > 0.0 {
        10.0 * (sum_squares / count).log10()
    } else {
        SILENCE_FLOOR_DB
    };
    if sum_squares <= 0.0 {
        return Levels {
            active_db: SILENCE_FLOOR_DB,
            rms_db,
        };
    }

    let mut active_db = SILENCE_FLOOR_DB;
    let mut prev_level_db = SILENCE_FLOOR_DB;
    let mut prev_threshold_db = SILENCE_FLOOR_DB;
    for j in 0..THRESHOLD_COUNT {
        if activity[j] == 0 {
            break;
        }
        let level_db = 10.0 * (sum_squares / activity[j] as f64).log10();
        let threshold_db = 20.0 * thresholds[j].log10();
        if level_db - threshold_db <= MARGIN_DB {
            active_db = if j == 0 {
                level_db
            } else {
                bin_interp(
                    level_db,
                    prev_level_db,
                    threshold_db,
                    prev_threshold_db,
                    MARGIN_DB,
                    INTERPOLATION_TOL_DB,
                )
            };
            break;
        }
        prev_level_db = level_db;
        prev_threshold_db = threshold_db;
    }

    Levels { active_db, rms_db }
}

/// Binary interpolation between the bracketing thresholds: halve the
/// (level, threshold) interval until the margin is met within tolerance.
fn bin_interp(
    mut upper_level: f64,
    mut lower_level: f64,
    mut upper_threshold: f64,
    mut lower_threshold: f64,
    margin: f64,
    tolerance: f64,
) -> f64 {
    let mut iteration = 0;
    loop {
        let mid_level = (upper_level + lower_level) / 2.0;
        let mid_threshold = (upper_threshold + lower_threshold) / 2.0;
        let diff = mid_level - mid_threshold - margin;
        iteration += 1;
        if diff.abs() <= tolerance || iteration > 20 {
            return mid_level;
        }
        if diff > 0.0 {
            lower_level = mid_level;
            lower_threshold = mid_threshold;
        } else {
            upper_level = mid_level;
            upper_threshold = mid_threshold;
        }
    }
}
