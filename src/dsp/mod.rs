//! Signal-processing primitives for the corpus pipeline.
/// A-weighting filter cascade.
pub mod aweight;
pub(crate) mod aweight_coeffs;
/// DC-offset removal.
pub mod dc;
/// Filter dispatch with group-delay compensation.
pub mod dispatch;
/// Stateful filter kernels (biquad cascades, FIR sections, resamplers).
pub mod kernels;
/// Active speech level measurement.
pub mod level;
