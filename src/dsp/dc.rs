//! Single-pole DC-offset removal.

use crate::config::SampleRate;

/// In-place high-pass recursion `y[n] = x[n] - x[n-1] + c * y[n-1]`.
///
/// The pole sits at 0.999 for 8 kHz data and 0.9995 for 16 kHz data. State
/// starts at zero on every call; the (negligible) group delay is not
/// compensated.
pub fn remove_dc(signal: &mut [f32], sample_rate: SampleRate) {
    let pole = match sample_rate {
        SampleRate::Hz8k => 0.999,
        SampleRate::Hz16k => 0.9995,
    };
    let mut prev_x = 0.0f64;
    let mut prev_y = 0.0f64;
    for sample in signal.iter_mut() {
        let x = f64::from(*sample);
        let y = x - prev_x + pole * prev_y;
        prev_x = x;
        prev_y = y;
        *sample = y as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_signal_decays_to_zero_mean() {
        for rate in [SampleRate::Hz8k, SampleRate::Hz16k] {
            let mut signal = vec![0.5f32; 32000];
            remove_dc(&mut signal, rate);
            let tail = &signal[16000..];
            let mean: f64 = tail.iter().map(|&s| f64::from(s)).sum::<f64>() / tail.len() as f64;
            assert!(mean.abs() < 1e-3, "{rate:?} residual mean {mean}");
        }
    }

    #[test]
    fn offset_tone_keeps_its_ac_component() {
        let mut signal: Vec<f32> = (0..16000)
            .map(|n| 0.3 + 0.2 * (2.0 * std::f32::consts::PI * 440.0 * n as f32 / 8000.0).sin())
            .collect();
        remove_dc(&mut signal, SampleRate::Hz8k);
        let tail = &signal[8000..];
        let mean: f64 = tail.iter().map(|&s| f64::from(s)).sum::<f64>() / tail.len() as f64;
        let peak = tail.iter().fold(0.0f32, |m, &s| m.max(s.abs()));
        assert!(mean.abs() < 1e-3);
        assert!(peak > 0.15);
    }
}
