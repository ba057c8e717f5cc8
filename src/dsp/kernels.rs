//! Stateful filter kernels with a fixed group-delay contract.
//!
//! A kernel is constructed, fed one whole padded block through
//! [`FilterKernel::apply`], and dropped; `reset` clears the delay lines when
//! a kernel is reused across blocks. Recursive sections use RBJ designs and
//! FIR sections are windowed-sinc designs computed at construction; each
//! family carries the constant group delay the dispatcher pads and trims
//! (see `FilterType::shift`).

use std::f64::consts::PI;

pub trait FilterKernel {
    /// Feed a block through the filter, returning the produced samples.
    fn apply(&mut self, input: &[f32]) -> Vec<f32>;
    /// Clear delay-line state.
    fn reset(&mut self);
}

/// Second-order recursive section, direct form I with f64 state.
#[derive(Debug, Clone)]
struct BiquadSection {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl BiquadSection {
    fn from_coefficients(b: [f64; 3], a: [f64; 3]) -> Self {
        let inv_a0 = 1.0 / a[0];
        Self {
            b0: b[0] * inv_a0,
            b1: b[1] * inv_a0,
            b2: b[2] * inv_a0,
            a1: a[1] * inv_a0,
            a2: a[2] * inv_a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    fn lowpass(cutoff_hz: f64, q: f64, rate_hz: f64) -> Self {
        let w0 = 2.0 * PI * cutoff_hz / rate_hz;
        let alpha = w0.sin() / (2.0 * q);
        let cw0 = w0.cos();
        Self::from_coefficients(
            [(1.0 - cw0) * 0.5, 1.0 - cw0, (1.0 - cw0) * 0.5],
            [1.0 + alpha, -2.0 * cw0, 1.0 - alpha],
        )
    }

    fn highpass(cutoff_hz: f64, q: f64, rate_hz: f64) -> Self {
        let w0 = 2.0 * PI * cutoff_hz / rate_hz;
        let alpha = w0.sin() / (2.0 * q);
        let cw0 = w0.cos();
        Self::from_coefficients(
            [(1.0 + cw0) * 0.5, -(1.0 + cw0), (1.0 + cw0) * 0.5],
            [1.0 + alpha, -2.0 * cw0, 1.0 - alpha],
        )
    }

    #[inline]
    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Cascaded-biquad telephone-band mask (G.712-style channel filter, 8 kHz).
/// Group delay is recursive and left uncompensated (shift 0).
pub struct CascadeIir {
    sections: Vec<BiquadSection>,
}

impl CascadeIir {
    pub fn g712_8k() -> Self {
        // 300-3400 Hz channel band: one high-pass section plus a 4th-order
        // Butterworth low-pass (Q pair 0.5412 / 1.3066).
        Self {
            sections: vec![
                BiquadSection::highpass(300.0, 0.7071, 8000.0),
                BiquadSection::lowpass(3400.0, 0.5412, 8000.0),
                BiquadSection::lowpass(3400.0, 1.3066, 8000.0),
            ],
        }
    }
}

impl FilterKernel for CascadeIir {
    fn apply(&mut self, input: &[f32]) -> Vec<f32> {
        input
            .iter()
            .map(|&sample| {
                let mut value = f64::from(sample);
                for section in &mut self.sections {
                    value = section.process(value);
                }
                value as f32
            })
            .collect()
    }

    fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }
}

/// Odd-length linear-phase FIR with group delay `(taps - 1) / 2`.
pub struct FirKernel {
    taps: Vec<f64>,
    history: Vec<f64>,
}

impl FirKernel {
    fn new(taps: Vec<f64>) -> Self {
        let order = taps.len() - 1;
        Self {
            taps,
            history: vec![0.0; order],
        }
    }

    /// P.341 send-side characteristic, 8 kHz design (251 taps, delay 125).
    pub fn p341_8k() -> Self {
        Self::new(design_highpass(251, 100.0 / 8000.0))
    }

    /// IRS send-side characteristic, 8 kHz design (151 taps, delay 75).
    pub fn irs_8k() -> Self {
        Self::new(design_bandpass(151, 300.0 / 8000.0, 3400.0 / 8000.0))
    }

    /// Modified-IRS characteristic at 16 kHz (653 taps, delay 326).
    pub fn mirs_16k() -> Self {
        Self::new(design_bandpass(653, 200.0 / 16000.0, 3800.0 / 16000.0))
    }

    /// P.341 wideband characteristic at 16 kHz (593 taps, delay 296).
    pub fn p341_16k() -> Self {
        Self::new(design_bandpass(593, 50.0 / 16000.0, 7000.0 / 16000.0))
    }

    /// Quarter-band smoothing filter shared by the 1:2 and 2:1 resamplers
    /// (39 taps, delay 19).
    fn half_band() -> Self {
        Self::new(design_lowpass(39, 0.25))
    }
}

impl FilterKernel for FirKernel {
    fn apply(&mut self, input: &[f32]) -> Vec<f32> {
        let order = self.taps.len() - 1;
        let mut extended = Vec::with_capacity(self.history.len() + input.len());
        extended.extend_from_slice(&self.history);
        extended.extend(input.iter().map(|&sample| f64::from(sample)));

        let mut output = Vec::with_capacity(input.len());
        for n in order..extended.len() {
            let mut acc = 0.0;
            for (j, tap) in self.taps.iter().enumerate() {
                acc += tap * extended[n - j];
            }
            output.push(acc as f32);
        }

        self.history.clear();
        self.history.extend_from_slice(&extended[extended.len() - order..]);
        output
    }

    fn reset(&mut self) {
        self.history.fill(0.0);
    }
}

/// 1:2 upsampler: zero interleave, then half-band smoothing with gain
/// compensation. Produces exactly twice the input length.
pub struct Upsampler2 {
    smoother: FirKernel,
}

impl Upsampler2 {
    pub fn new() -> Self {
        Self {
            smoother: FirKernel::half_band(),
        }
    }
}

impl FilterKernel for Upsampler2 {
    fn apply(&mut self, input: &[f32]) -> Vec<f32> {
        let mut stuffed = vec![0.0f32; input.len() * 2];
        for (i, &sample) in input.iter().enumerate() {
            stuffed[2 * i] = sample * 2.0;
        }
        self.smoother.apply(&stuffed)
    }

    fn reset(&mut self) {
        self.smoother.reset();
    }
}

/// 2:1 downsampler: half-band smoothing, then decimation. Produces exactly
/// half the input length (rounded down).
pub struct Downsampler2 {
    smoother: FirKernel,
}

impl Downsampler2 {
    pub fn new() -> Self {
        Self {
            smoother: FirKernel::half_band(),
        }
    }
}

impl FilterKernel for Downsampler2 {
    fn apply(&mut self, input: &[f32]) -> Vec<f32> {
        let smoothed = self.smoother.apply(input);
        let mut output: Vec<f32> = smoothed.into_iter().step_by(2).collect();
        output.truncate(input.len() / 2);
        output
    }

    fn reset(&mut self) {
        self.smoother.reset();
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { (PI * x).sin() / (PI * x) }
}

/// Hamming-windowed sinc low-pass, normalized to unity DC gain.
/// `cutoff` is a fraction of the sample rate (0..0.5).
fn design_lowpass(taps: usize, cutoff: f64) -> Vec<f64> {
    debug_assert!(taps % 2 == 1, "linear-phase designs need an odd tap count");
    let mid = (taps - 1) as f64 / 2.0;
    let mut coefficients: Vec<f64> = (0..taps)
        .map(|i| {
            let t = i as f64 - mid;
            let window = 0.54 - 0.46 * (2.0 * PI * i as f64 / (taps - 1) as f64).cos();
            2.0 * cutoff * sinc(2.0 * cutoff * t) * window
        })
        .collect();
    let sum: f64 = coefficients.iter().sum();
    for value in &mut coefficients {
        *value /= sum;
    }
    coefficients
}

/// Spectral inversion of the matching low-pass.
fn design_highpass(taps: usize, cutoff: f64) -> Vec<f64> {
    let mut coefficients = design_lowpass(taps, cutoff);
    for value in &mut coefficients {
        *value = -*value;
    }
    coefficients[(taps - 1) / 2] += 1.0;
    coefficients
}

/// Difference of two low-pass designs.
fn design_bandpass(taps: usize, low: f64, high: f64) -> Vec<f64> {
    let upper = design_lowpass(taps, high);
    let lower = design_lowpass(taps, low);
    upper
        .into_iter()
        .zip(lower)
        .map(|(hi, lo)| hi - lo)
        .collect()
}
