//! Library exports for the noisemix corpus-building pipeline.
/// Sample I/O for WAV and raw 16-bit PCM files.
pub mod codec;
/// Run configuration and validation.
pub mod config;
/// Signal-processing primitives: kernels, dispatch, weighting, level metering.
pub mod dsp;
/// List-file reading and input/output pairing.
pub mod lists;
/// Logging setup.
pub mod logging;
/// SNR gain computation, additive mixing and overload correction.
pub mod mix;
/// Noise pool construction and segment selection.
pub mod noise;
/// Per-file pipeline and batch runner.
pub mod process;
