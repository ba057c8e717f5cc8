//! A-weighting filter: a fixed second-order recursive high-pass followed by
//! a long FIR section (401 taps at 8 kHz, 301 taps at 16 kHz).
//!
//! Both stages run in double precision regardless of the buffer's storage
//! precision so rounding does not accumulate over long signals; the result
//! is cast back down on output. The recursive stage writes into the middle
//! of a padded work buffer so the FIR stage below reads a full window for
//! every output sample, which keeps the cascade free of visible delay.

use crate::config::SampleRate;
use crate::dsp::aweight_coeffs::{
    FIR_8K, FIR_16K, IIR_A_8K, IIR_A_16K, IIR_B_8K, IIR_B_16K,
};

/// Apply the A-weighting cascade in place. Same length in and out.
pub fn a_weight(signal: &mut [f32], sample_rate: SampleRate) {
    let (fir, iir_b, iir_a): (&[f64], &[f64; 3], &[f64; 3]) = match sample_rate {
        SampleRate::Hz8k => (&FIR_8K, &IIR_B_8K, &IIR_A_8K),
        SampleRate::Hz16k => (&FIR_16K, &IIR_B_16K, &IIR_A_16K),
    };
    let taps = fir.len();
    let half = taps / 2;

    let mut work = vec![0.0f64; signal.len() + taps - 1];
    let mut prev_x1 = 0.0f64;
    let mut prev_x2 = 0.0f64;
    let mut prev_y1 = 0.0f64;
    let mut prev_y2 = 0.0f64;
    for (i, sample) in signal.iter().enumerate() {
        let x = f64::from(*sample);
        let mut y = x * iir_b[0] + prev_x1 * iir_b[1] + prev_x2 * iir_b[2];
        y -= iir_a[1] * prev_y1 + iir_a[2] * prev_y2;
        prev_x2 = prev_x1;
        prev_x1 = x;
        prev_y2 = prev_y1;
        prev_y1 = y;
        work[i + half] = y;
    }

    for i in 0..signal.len() {
        let mut acc = 0.0f64;
        for (j, tap) in fir.iter().enumerate() {
            acc += tap * work[i + j];
        }
        signal[i] = acc as f32;
    }
}
