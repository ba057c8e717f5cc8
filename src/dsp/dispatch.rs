//! Maps a named filter type onto kernel invocations with group-delay
//! padding and trim.
//!
//! Every call is self-contained: the input is extended by the family's shift
//! with zeros at the tail, the kernel chain runs over the whole block, and
//! the first `shift` transient samples are discarded so the output lines up
//! with the input. The downsampling types halve the signal.

use thiserror::Error;

use crate::config::FilterType;
use crate::dsp::kernels::{CascadeIir, Downsampler2, FilterKernel, FirKernel, Upsampler2};

/// A kernel chain returned a different sample count than the dispatcher
/// derived; internal consistency is broken and the run must abort.
#[derive(Debug, Error)]
#[error("{filter} filtering produced {actual} samples, expected {expected}")]
pub struct FilterCountMismatch {
    pub filter: FilterType,
    pub expected: usize,
    pub actual: usize,
}

/// Apply `filter` to `signal` in place.
pub fn apply_filter(signal: &mut Vec<f32>, filter: FilterType) -> Result<(), FilterCountMismatch> {
    let count = signal.len();
    let shift = filter.shift();
    let mut padded = Vec::with_capacity(count + shift);
    padded.extend_from_slice(signal);
    padded.resize(count + shift, 0.0);

    let (output, kept) = match filter {
        FilterType::G712 => (CascadeIir::g712_8k().apply(&padded), count),
        FilterType::P341 => (FirKernel::p341_8k().apply(&padded), count),
        FilterType::Irs => (FirKernel::irs_8k().apply(&padded), count),
        FilterType::P341At16k => (FirKernel::p341_16k().apply(&padded), count),
        FilterType::Mirs => {
            // band shaping happens at twice the rate
            let widened = Upsampler2::new().apply(&padded);
            let shaped = FirKernel::mirs_16k().apply(&widened);
            (Downsampler2::new().apply(&shaped), count)
        }
        FilterType::G712From16k => {
            let halved = Downsampler2::new().apply(&padded);
            (CascadeIir::g712_8k().apply(&halved), count / 2)
        }
        FilterType::Downsample2 => (Downsampler2::new().apply(&padded), count / 2),
    };

    let expected = kept + shift;
    if output.len() != expected {
        return Err(FilterCountMismatch {
            filter,
            expected,
            actual: output.len(),
        });
    }

    signal.clear();
    signal.extend_from_slice(&output[shift..shift + kept]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FILTERS: [FilterType; 7] = [
        FilterType::G712,
        FilterType::P341,
        FilterType::Irs,
        FilterType::Mirs,
        FilterType::P341At16k,
        FilterType::G712From16k,
        FilterType::Downsample2,
    ];

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|n| ((n % 100) as f32 - 50.0) / 100.0).collect()
    }

    #[test]
    fn sample_count_round_trips_for_every_filter() {
        for filter in ALL_FILTERS {
            for len in [256usize, 1001, 4096] {
                let mut signal = ramp(len);
                apply_filter(&mut signal, filter).unwrap();
                let expected = match filter {
                    FilterType::G712From16k | FilterType::Downsample2 => len / 2,
                    _ => len,
                };
                assert_eq!(signal.len(), expected, "{filter} at {len}");
            }
        }
    }

    #[test]
    fn shift_constants_match_kernel_delays() {
        // A unit impulse through a delay-compensated filter must come back
        // centered near t=0 after the trim.
        for filter in [FilterType::P341, FilterType::Irs, FilterType::P341At16k] {
            let mut signal = vec![0.0f32; 512];
            signal[0] = 1.0;
            apply_filter(&mut signal, filter).unwrap();
            let peak_at = signal
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
                .map(|(i, _)| i)
                .unwrap();
            assert!(peak_at <= 2, "{filter} peak at {peak_at}");
        }
    }

    #[test]
    fn composite_chain_compensates_its_delay() {
        let mut signal = vec![0.0f32; 1024];
        signal[0] = 1.0;
        apply_filter(&mut signal, FilterType::Mirs).unwrap();
        let peak_at = signal
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .map(|(i, _)| i)
            .unwrap();
        assert!(peak_at <= 2, "peak at {peak_at}");
    }
}
