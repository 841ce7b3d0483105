//! Signal Spectrum - sampled waveforms with a text codec and band power analysis
//!
//! A `Signal` is an immutable `(duration, samples)` pair. It round-trips
//! exactly through the text form `"<duration> [<s0>, <s1>, ...]"`, and its
//! spectral power inside a frequency band is computed from a pluggable
//! real-input Fourier transform.

pub mod analysis;
pub mod batch;
pub mod codec;
pub mod error;
pub mod model;
pub mod validation;

pub use analysis::{band_power, FourierTransform, FrequencyBand, RustFftTransform, SpectralAnalyzer};
pub use batch::{BatchConfig, BatchPipeline};
pub use codec::{decode, encode};
pub use error::{SignalError, SyntaxReason, TransformError};
pub use model::Signal;
